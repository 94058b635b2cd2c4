//! Triptych - Turn subject-predicate-object triplets into knowledge graph diagrams
//!
//! A library for building renderable knowledge graph diagrams from extracted
//! triplets: entity deduplication, theme-aware coloring, size-based layout
//! selection, and a render/export lifecycle over a pluggable rendering engine.
//!
//! # Quick Start
//!
//! ```rust
//! use triptych::{elements_from_json, select_layout};
//!
//! let payload = r#"{"triplets": [
//!     {"subject": "Ada Lovelace", "predicate": "field of work", "object": "mathematics",
//!      "subject_type": "human", "subject_qid": "Q7259"}
//! ]}"#;
//!
//! let elements = elements_from_json(payload).unwrap();
//! assert_eq!(elements.node_count(), 2);
//!
//! let layout = select_layout(elements.node_count());
//! assert_eq!(layout.name(), "grid");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use triptych::prelude::*;
//!
//! let payload = AnalysisPayload::from_json(r#"{"triplets": [
//!     {"subject": "Marie Curie", "predicate": "educated at", "object": "University of Paris",
//!      "subject_type": "human", "subject_qid": "Q7186", "object_qid": "Q209842"},
//!     {"subject": "Marie Curie", "predicate": "country of citizenship", "object": "Poland",
//!      "subject_type": "human", "subject_qid": "Q7186", "object_type": "country", "object_qid": "Q36"}
//! ]}"#).unwrap();
//! let triplets = payload.into_triplets();
//!
//! // Resolve theme variables however the host stores them
//! let theme = |variable: &str, fallback: &str| -> String {
//!     match variable {
//!         "--human" => "#f472b6".to_string(),
//!         _ => fallback.to_string(),
//!     }
//! };
//!
//! // Entities sharing an identifier collapse into one node
//! let elements = build_elements(&triplets, &theme);
//! assert_eq!(elements.node_count(), 3);
//! assert_eq!(elements.edge_count(), 2);
//! assert_eq!(elements.nodes[0].color, "#f472b6");
//!
//! let layout = select_layout(elements.node_count());
//! assert_eq!(layout.name(), "circle");
//! ```

pub mod diagram;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
pub mod theme;

pub use diagram::*;
pub use engine::*;
pub use error::*;
pub use graph::*;
pub use logging::*;
pub use theme::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::diagram::{
        select_layout, ArtifactSink, DiagramController, DiagramState, ExportArtifact,
        FileSystemSink, LayoutSpec, StyleSheet,
    };
    pub use crate::engine::{
        DiagramInstance, DiagramSpec, InteractionBounds, RenderingEngine, SnapshotOptions,
    };
    pub use crate::error::TriptychError;
    pub use crate::graph::{
        build_elements, AnalysisPayload, EntityNode, GraphElements, RelationEdge, Triplet,
    };
    pub use crate::theme::{DefaultTheme, SemanticCategory, ThemeResolver};
}

/// Build graph elements straight from an analysis payload
///
/// This is the simplest way to go from backend output to renderable
/// elements. Uses the default theme, so every node gets the fallback colors.
///
/// # Arguments
/// * `json` - An analysis payload (e.g., `{"triplets": [...]}`)
///
/// # Returns
/// * `Ok(GraphElements)` - Deduplicated nodes and edges, ready to render
/// * `Err` - If the payload is not valid JSON
///
/// # Example
/// ```rust
/// use triptych::elements_from_json;
///
/// let payload = r#"{"triplets": [
///     {"subject": "Rust", "predicate": "paradigm", "object": "systems programming"}
/// ]}"#;
///
/// let elements = elements_from_json(payload).unwrap();
/// assert_eq!(elements.node_count(), 2);
/// assert_eq!(elements.edge_count(), 1);
/// assert_eq!(elements.nodes[0].color, "#38bdf8");
/// ```
pub fn elements_from_json(json: &str) -> Result<GraphElements, TriptychError> {
    elements_from_json_with_theme(json, &DefaultTheme)
}

/// Build graph elements from an analysis payload with a specific theme
///
/// Allows control over the colors assigned to each entity category.
///
/// # Arguments
/// * `json` - An analysis payload (e.g., `{"triplets": [...]}`)
/// * `theme` - Resolver for the category color variables
///
/// # Returns
/// * `Ok(GraphElements)` - Deduplicated nodes and edges, ready to render
/// * `Err` - If the payload is not valid JSON
///
/// # Example
/// ```rust
/// use triptych::elements_from_json_with_theme;
///
/// let theme = |variable: &str, fallback: &str| -> String {
///     if variable == "--org" {
///         "#4ade80".to_string()
///     } else {
///         fallback.to_string()
///     }
/// };
///
/// let payload = r#"{"triplets": [
///     {"subject": "CERN", "predicate": "located in", "object": "Geneva",
///      "subject_type": "organization"}
/// ]}"#;
///
/// let elements = elements_from_json_with_theme(payload, &theme).unwrap();
/// assert_eq!(elements.nodes[0].color, "#4ade80");
/// assert_eq!(elements.nodes[1].color, "#38bdf8");
/// ```
pub fn elements_from_json_with_theme(
    json: &str,
    theme: &dyn ThemeResolver,
) -> Result<GraphElements, TriptychError> {
    let payload = AnalysisPayload::from_json(json)?;
    Ok(build_elements(&payload.into_triplets(), theme))
}
