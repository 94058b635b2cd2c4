//! Graph construction from triplets
//!
//! Collapses a triplet list into unique entity nodes plus one edge per
//! triplet. Nodes are keyed by knowledge-base identifier when one is present,
//! so repeated mentions of the same entity merge into a single node. Without
//! an identifier each mention gets a positional key and stays distinct, since
//! two entities sharing a surface label are not necessarily the same thing.

use std::collections::HashSet;

use tracing::{debug, span, Level};

use crate::graph::{EntityNode, GraphElements, RelationEdge, Triplet};
use crate::theme::{color_for, ThemeResolver};

/// Label used when an entity has no surface text
pub const DEFAULT_LABEL: &str = "Unknown";

/// Entity type used when the extraction did not classify an entity
pub const DEFAULT_ENTITY_TYPE: &str = "entity";

/// A node collected during the dedup pass, before display metadata is added
struct PendingNode {
    id: String,
    label: String,
    entity_type: String,
}

/// Build renderable elements from a list of triplets
///
/// Each triplet contributes its subject node, its object node, and one edge.
/// Nodes with the same key merge; the first mention wins, so later triplets
/// never overwrite a node's label or type. Edges are never merged, which
/// keeps parallel and duplicate relations visible.
///
/// Node fill colors are resolved through `theme` by entity type.
///
/// # Example
/// ```rust
/// use triptych::graph::{build_elements, Triplet};
/// use triptych::theme::DefaultTheme;
///
/// let triplets = vec![
///     Triplet {
///         subject_qid: Some("Q7251".to_string()),
///         ..Triplet::with_types("Alan Turing", "born in", "London", "human", "gpe")
///     },
///     Triplet {
///         subject_qid: Some("Q7251".to_string()),
///         ..Triplet::with_types("Alan Turing", "worked at", "GCHQ", "human", "org")
///     },
/// ];
///
/// let elements = build_elements(&triplets, &DefaultTheme);
/// assert_eq!(elements.node_count(), 3); // Turing deduplicated by QID
/// assert_eq!(elements.edge_count(), 2);
/// ```
pub fn build_elements(triplets: &[Triplet], theme: &dyn ThemeResolver) -> GraphElements {
    let build_span = span!(Level::DEBUG, "build_elements", triplet_count = triplets.len());
    let _enter = build_span.enter();

    let mut seen = HashSet::new();
    let mut pending: Vec<PendingNode> = Vec::new();
    let mut edges = Vec::with_capacity(triplets.len());

    for (index, triplet) in triplets.iter().enumerate() {
        let subject_id = node_key(triplet.subject_qid.as_deref(), &triplet.subject, index, "s");
        let object_id = node_key(triplet.object_qid.as_deref(), &triplet.object, index, "o");

        collect_node(
            &mut seen,
            &mut pending,
            &subject_id,
            &triplet.subject,
            triplet.subject_type.as_deref(),
        );
        collect_node(
            &mut seen,
            &mut pending,
            &object_id,
            &triplet.object,
            triplet.object_type.as_deref(),
        );

        edges.push(RelationEdge {
            id: format!("e-{}", index),
            source: subject_id,
            target: object_id,
            label: triplet.predicate.clone(),
        });
    }

    let nodes: Vec<EntityNode> = pending
        .into_iter()
        .map(|node| {
            let PendingNode {
                id,
                label,
                entity_type,
            } = node;
            let label = if label.is_empty() {
                DEFAULT_LABEL.to_string()
            } else {
                label
            };
            let color = color_for(theme, &entity_type);
            let display_label = format_display_label(&label, &entity_type);
            EntityNode {
                id,
                label,
                entity_type,
                color,
                display_label,
            }
        })
        .collect();

    debug!(
        node_count = nodes.len(),
        edge_count = edges.len(),
        "Built graph elements"
    );

    GraphElements { nodes, edges }
}

/// Two-line display caption: entity name over its upper-cased type
///
/// Empty inputs fall back to "Unknown" and "entity". Underscores in the type
/// read as spaces, so `research_lab` captions as `RESEARCH LAB`.
///
/// # Example
/// ```rust
/// use triptych::graph::format_display_label;
///
/// assert_eq!(
///     format_display_label("CERN", "research_lab"),
///     "CERN\nRESEARCH LAB"
/// );
/// assert_eq!(format_display_label("", ""), "Unknown\nENTITY");
/// ```
pub fn format_display_label(label: &str, entity_type: &str) -> String {
    let name = if label.is_empty() { DEFAULT_LABEL } else { label };
    let entity_type = if entity_type.is_empty() {
        DEFAULT_ENTITY_TYPE
    } else {
        entity_type
    };
    format!("{}\n{}", name, entity_type.replace('_', " ").to_uppercase())
}

/// Node key: the knowledge-base id when present, otherwise a positional key
/// built from the label, the triplet index, and the role within the triplet.
fn node_key(qid: Option<&str>, label: &str, index: usize, role: &str) -> String {
    match qid {
        Some(qid) if !qid.is_empty() => qid.to_string(),
        _ => format!("{}-{}-{}", label, index, role),
    }
}

fn collect_node(
    seen: &mut HashSet<String>,
    pending: &mut Vec<PendingNode>,
    id: &str,
    label: &str,
    entity_type: Option<&str>,
) {
    if !seen.insert(id.to_string()) {
        return;
    }
    let entity_type = match entity_type {
        Some(entity_type) if !entity_type.is_empty() => entity_type,
        _ => DEFAULT_ENTITY_TYPE,
    };
    pending.push(PendingNode {
        id: id.to_string(),
        label: label.to_string(),
        entity_type: entity_type.to_string(),
    });
}
