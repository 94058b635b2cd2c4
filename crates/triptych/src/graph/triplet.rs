//! Triplet input model
//!
//! A triplet is one extracted statement: subject, predicate, object, plus
//! optional entity types and knowledge-base identifiers. Triplets arrive as
//! JSON from the analysis backend and are deliberately lenient: any field may
//! be missing, and empty strings count as missing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TriptychError;

/// A subject-predicate-object statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Triplet {
    /// Subject surface text
    #[serde(default)]
    pub subject: String,

    /// Relationship between subject and object
    #[serde(default)]
    pub predicate: String,

    /// Object surface text
    #[serde(default)]
    pub object: String,

    /// Entity type of the subject (e.g. "human", "country")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,

    /// Entity type of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// Knowledge-base identifier of the subject (e.g. a Wikidata QID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_qid: Option<String>,

    /// Knowledge-base identifier of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_qid: Option<String>,

    /// Knowledge-base identifier of the predicate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate_pid: Option<String>,
}

impl Triplet {
    /// Create a new triplet with no types or identifiers
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            ..Self::default()
        }
    }

    /// Create a new triplet with entity types
    pub fn with_types(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
        subject_type: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            subject_type: Some(subject_type.into()),
            object_type: Some(object_type.into()),
            ..Self::default()
        }
    }
}

/// Wire payload wrapping a list of extracted triplets
///
/// Matches the JSON body produced by the analysis backend:
/// `{"triplets": [...]}`. A missing or null list is treated as empty.
///
/// # Example
/// ```rust
/// use triptych::graph::AnalysisPayload;
///
/// let payload = AnalysisPayload::from_json(
///     r#"{"triplets": [{"subject": "Ada", "predicate": "born in", "object": "London"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(payload.triplets.len(), 1);
/// assert_eq!(payload.triplets[0].subject, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisPayload {
    /// Extracted statements, in extraction order
    #[serde(default, deserialize_with = "nullable_triplets")]
    pub triplets: Vec<Triplet>,
}

impl AnalysisPayload {
    /// Parse a payload from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self, TriptychError> {
        serde_json::from_str(json).map_err(|e| TriptychError::payload_error(e.to_string()))
    }

    /// Consume the payload, yielding its triplets
    pub fn into_triplets(self) -> Vec<Triplet> {
        self.triplets
    }
}

// Backends emit `"triplets": null` when extraction found nothing.
fn nullable_triplets<'de, D>(deserializer: D) -> Result<Vec<Triplet>, D::Error>
where
    D: Deserializer<'de>,
{
    let triplets = Option::<Vec<Triplet>>::deserialize(deserializer)?;
    Ok(triplets.unwrap_or_default())
}
