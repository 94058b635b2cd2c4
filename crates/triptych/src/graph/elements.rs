//! Renderable graph elements
//!
//! The output of the graph builder: deduplicated entity nodes and one
//! relation edge per triplet, tagged with everything a rendering engine
//! needs. Field names on the wire follow the engine convention (`type`,
//! `displayLabel`).

use serde::{Deserialize, Serialize};

/// A deduplicated entity with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
    /// Stable node identifier: knowledge-base id, or a synthesized key
    pub id: String,
    /// Entity name shown to users
    pub label: String,
    /// Entity type after defaulting
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Resolved fill color
    pub color: String,
    /// Two-line caption: name over the upper-cased type
    #[serde(rename = "displayLabel")]
    pub display_label: String,
}

/// A directed relation between two entity nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// Edge identifier, unique per triplet position
    pub id: String,
    /// Id of the subject node
    pub source: String,
    /// Id of the object node
    pub target: String,
    /// Predicate text, possibly empty
    pub label: String,
}

/// Graph elements ready for a rendering engine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphElements {
    /// Unique entity nodes, in first-seen order
    pub nodes: Vec<EntityNode>,
    /// One edge per input triplet, in input order
    pub edges: Vec<RelationEdge>,
}

impl GraphElements {
    /// Number of unique entity nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relation edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
