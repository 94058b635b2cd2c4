//! Rendering engine abstraction
//!
//! The library decides what a diagram contains; drawing it is delegated to a
//! rendering engine behind the [`RenderingEngine`] trait. An engine turns a
//! [`DiagramSpec`] into a live [`DiagramInstance`] that can run layouts,
//! adjust its viewport, and rasterize PNG snapshots. Engines are typically
//! adapters around a canvas, a GPU surface, or a browser-hosted renderer.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::diagram::{LayoutSpec, StyleSheet};
use crate::graph::GraphElements;

/// Viewport and interaction limits for a diagram instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionBounds {
    /// Minimum zoom factor
    pub min_zoom: f64,
    /// Maximum zoom factor
    pub max_zoom: f64,
    /// Scroll wheel zoom sensitivity
    pub wheel_sensitivity: f64,
    /// Whether nodes may be dragged
    pub nodes_grabbable: bool,
    /// Whether nodes may be selected
    pub nodes_selectable: bool,
}

impl Default for InteractionBounds {
    fn default() -> Self {
        Self {
            min_zoom: 0.4,
            max_zoom: 1.8,
            wheel_sensitivity: 0.2,
            nodes_grabbable: true,
            nodes_selectable: true,
        }
    }
}

/// Snapshot rasterization options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotOptions {
    /// Rasterization scale relative to the on-screen size
    pub scale: f64,
    /// Capture the full diagram bounds instead of the visible viewport
    pub full: bool,
    /// Background color behind the diagram
    pub background: String,
}

impl SnapshotOptions {
    /// Full-bounds snapshot at double scale over the given background
    pub fn full_bounds(background: impl Into<String>) -> Self {
        Self {
            scale: 2.0,
            full: true,
            background: background.into(),
        }
    }
}

/// Everything an engine needs to instantiate a diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSpec {
    /// Deduplicated nodes and edges
    pub elements: GraphElements,
    /// Diagram-wide styling
    pub style: StyleSheet,
    /// Viewport and interaction limits
    pub bounds: InteractionBounds,
}

/// A live diagram created by a rendering engine
///
/// Instances hold whatever resources the engine allocated for the diagram
/// (canvases, GPU buffers, DOM nodes). [`destroy`](DiagramInstance::destroy)
/// must be called before the instance is discarded; the lifecycle controller
/// takes care of this.
pub trait DiagramInstance {
    /// Run a layout over the diagram's nodes
    fn run_layout(&mut self, layout: &LayoutSpec) -> Result<()>;

    /// Center the diagram within the viewport
    fn center(&mut self) -> Result<()>;

    /// Fit the viewport to the diagram with the given padding in pixels
    fn fit(&mut self, padding: u32) -> Result<()>;

    /// Rasterize the diagram to PNG bytes
    fn png(&self, options: &SnapshotOptions) -> Result<Vec<u8>>;

    /// Release every resource held by the instance
    ///
    /// Must be idempotent; the instance is unusable afterwards.
    fn destroy(&mut self);
}

/// Factory for diagram instances
pub trait RenderingEngine {
    /// Create a live diagram from the given spec
    fn create(&self, spec: DiagramSpec) -> Result<Box<dyn DiagramInstance>>;

    /// Get the name of this engine
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullInstance;

    impl DiagramInstance for NullInstance {
        fn run_layout(&mut self, _layout: &LayoutSpec) -> Result<()> {
            Ok(())
        }

        fn center(&mut self) -> Result<()> {
            Ok(())
        }

        fn fit(&mut self, _padding: u32) -> Result<()> {
            Ok(())
        }

        fn png(&self, _options: &SnapshotOptions) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }

        fn destroy(&mut self) {}
    }

    struct NullEngine;

    impl RenderingEngine for NullEngine {
        fn create(&self, _spec: DiagramSpec) -> Result<Box<dyn DiagramInstance>> {
            Ok(Box::new(NullInstance))
        }

        fn name(&self) -> &'static str {
            "null"
        }
    }

    #[test]
    fn test_interaction_bounds_defaults() {
        let bounds = InteractionBounds::default();
        assert_eq!(bounds.min_zoom, 0.4);
        assert_eq!(bounds.max_zoom, 1.8);
        assert_eq!(bounds.wheel_sensitivity, 0.2);
        assert!(bounds.nodes_grabbable);
        assert!(bounds.nodes_selectable);
    }

    #[test]
    fn test_snapshot_full_bounds() {
        let options = SnapshotOptions::full_bounds("#0f172a");
        assert_eq!(options.scale, 2.0);
        assert!(options.full);
        assert_eq!(options.background, "#0f172a");
    }

    #[test]
    fn test_engine_is_object_safe() {
        let engine: Box<dyn RenderingEngine> = Box::new(NullEngine);
        assert_eq!(engine.name(), "null");

        let spec = DiagramSpec {
            elements: GraphElements::default(),
            style: StyleSheet::default(),
            bounds: InteractionBounds::default(),
        };
        let mut instance = engine.create(spec).unwrap();
        assert!(instance.run_layout(&crate::diagram::select_layout(1)).is_ok());
        instance.destroy();
    }

    #[test]
    fn test_bounds_wire_field_names() {
        let json = serde_json::to_string(&InteractionBounds::default()).unwrap();
        assert!(json.contains("minZoom"));
        assert!(json.contains("wheelSensitivity"));
        assert!(json.contains("nodesGrabbable"));
    }
}
