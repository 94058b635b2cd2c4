//! Diagram lifecycle management
//!
//! [`DiagramController`] owns at most one live diagram at a time. Every
//! render tears the previous instance down before anything else happens, so
//! engine resources never leak and stale diagrams never linger behind fresh
//! data. Exports capture whatever diagram is currently live.
//!
//! The controller is a view-model: render and export failures are logged and
//! absorbed rather than propagated, and the queryable state (placeholder
//! visibility, export availability) always stays consistent with what a
//! caller should present.

use chrono::Utc;
use tracing::{debug, error, info, span, Level};

use crate::diagram::{
    export_filename, select_layout, ArtifactSink, ExportArtifact, LayoutSpec, StyleSheet,
};
use crate::engine::{
    DiagramInstance, DiagramSpec, InteractionBounds, RenderingEngine, SnapshotOptions,
};
use crate::error::TriptychError;
use crate::graph::{build_elements, Triplet};
use crate::theme::{ThemeResolver, BACKGROUND_VAR, DEFAULT_BACKGROUND_COLOR};

/// Padding in pixels around the fitted diagram after layout
const FIT_PADDING: u32 = 40;

/// Whether a live diagram instance currently exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramState {
    /// No live diagram; nothing to export
    Absent,
    /// A diagram instance is live
    Active,
}

/// Stateful owner of the render and export lifecycle
///
/// The controller runs the full pipeline on every render: teardown, graph
/// construction, layout selection, instance creation, and viewport
/// settling. It is single-threaded by construction; a render replaces the
/// previous diagram in place.
///
/// # Example
/// ```rust
/// use triptych::diagram::{DiagramController, DiagramState, FileSystemSink};
/// use triptych::theme::DefaultTheme;
///
/// // No engine wired up: renders fall back to the placeholder or log errors
/// let mut controller = DiagramController::new(DefaultTheme, FileSystemSink::new("."));
/// controller.render(Vec::new());
///
/// assert_eq!(controller.state(), DiagramState::Absent);
/// assert!(controller.placeholder_visible());
/// assert!(!controller.export_available());
/// ```
pub struct DiagramController {
    engine: Option<Box<dyn RenderingEngine>>,
    theme: Box<dyn ThemeResolver>,
    sink: Box<dyn ArtifactSink>,
    instance: Option<Box<dyn DiagramInstance>>,
    latest: Vec<Triplet>,
    export_enabled: bool,
    placeholder_visible: bool,
}

impl DiagramController {
    /// Create a controller with no rendering engine
    ///
    /// Non-empty renders will log an error and leave the diagram absent.
    /// Useful for headless setups that only need the data pipeline, and for
    /// hosts where the engine failed to load.
    pub fn new(theme: impl ThemeResolver + 'static, sink: impl ArtifactSink + 'static) -> Self {
        Self {
            engine: None,
            theme: Box::new(theme),
            sink: Box::new(sink),
            instance: None,
            latest: Vec::new(),
            export_enabled: false,
            placeholder_visible: true,
        }
    }

    /// Create a controller backed by a rendering engine
    pub fn with_engine(
        engine: impl RenderingEngine + 'static,
        theme: impl ThemeResolver + 'static,
        sink: impl ArtifactSink + 'static,
    ) -> Self {
        let mut controller = Self::new(theme, sink);
        controller.engine = Some(Box::new(engine));
        controller
    }

    /// Render a fresh diagram from `triplets`
    ///
    /// The previous diagram, if any, is always torn down first, and the
    /// triplets are recorded as the latest state even when rendering fails.
    /// An empty list shows the placeholder instead of a diagram. Failures
    /// are logged and absorbed.
    pub fn render(&mut self, triplets: Vec<Triplet>) {
        if let Err(error) = self.try_render(triplets) {
            error!(%error, "Diagram render failed");
        }
    }

    fn try_render(&mut self, triplets: Vec<Triplet>) -> Result<(), TriptychError> {
        let render_span = span!(Level::INFO, "render_diagram", triplet_count = triplets.len());
        let _enter = render_span.enter();

        self.latest = triplets;
        self.teardown();

        if self.latest.is_empty() {
            self.placeholder_visible = true;
            debug!("No triplets to render; showing placeholder");
            return Ok(());
        }

        self.placeholder_visible = false;

        let engine = self
            .engine
            .as_deref()
            .ok_or(TriptychError::EngineUnavailable)?;

        let elements = build_elements(&self.latest, self.theme.as_ref());
        let node_count = elements.node_count();
        let edge_count = elements.edge_count();
        let layout = select_layout(node_count);

        let spec = DiagramSpec {
            elements,
            style: StyleSheet::themed(self.theme.as_ref()),
            bounds: InteractionBounds::default(),
        };

        debug!(engine = engine.name(), "Creating diagram instance");
        let mut instance = engine
            .create(spec)
            .map_err(|e| TriptychError::engine_error(e.to_string()))?;

        // The instance is installed even if settling fails below, so the
        // next render can tear it down. Export stays disabled on failure.
        let settled = settle_viewport(instance.as_mut(), &layout);
        self.instance = Some(instance);
        settled?;

        self.export_enabled = true;
        info!(
            node_count,
            edge_count,
            layout = layout.name(),
            "Diagram rendered"
        );
        Ok(())
    }

    /// Export the live diagram as a PNG artifact
    ///
    /// Captures the full diagram bounds at double scale over the themed
    /// background color and hands the result to the artifact sink. Without a
    /// live diagram this is a no-op. Failures are logged and absorbed.
    pub fn export(&mut self) {
        if let Err(error) = self.try_export() {
            error!(%error, "Diagram export failed");
        }
    }

    fn try_export(&mut self) -> Result<(), TriptychError> {
        let export_span = span!(Level::INFO, "export_diagram");
        let _enter = export_span.enter();

        let Some(instance) = self.instance.as_ref() else {
            debug!("No live diagram to export");
            return Ok(());
        };

        let background = self.theme.resolve(BACKGROUND_VAR, DEFAULT_BACKGROUND_COLOR);
        let options = SnapshotOptions::full_bounds(background);
        let bytes = instance
            .png(&options)
            .map_err(|e| TriptychError::snapshot_error(e.to_string()))?;

        let filename = export_filename(Utc::now());
        let artifact = ExportArtifact::png(filename.clone(), bytes);
        self.sink
            .deliver(artifact)
            .map_err(|e| TriptychError::export_error(e.to_string()))?;

        info!(filename = %filename, "Diagram exported");
        Ok(())
    }

    /// Destroy the live diagram instance, if any
    ///
    /// Export becomes unavailable until the next successful render. Render
    /// calls this automatically; call it directly when the diagram should go
    /// away without a replacement.
    pub fn teardown(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.destroy();
            debug!("Destroyed previous diagram instance");
        }
        self.export_enabled = false;
    }

    /// Whether a live diagram instance currently exists
    pub fn state(&self) -> DiagramState {
        if self.instance.is_some() {
            DiagramState::Active
        } else {
            DiagramState::Absent
        }
    }

    /// Whether export would capture a fully rendered diagram
    ///
    /// Callers gating an export control should consult this rather than
    /// [`state`](Self::state): a diagram whose layout failed is live but not
    /// worth exporting.
    pub fn export_available(&self) -> bool {
        self.export_enabled
    }

    /// Whether the empty-state placeholder should be shown
    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// The triplets from the most recent render call
    pub fn latest_triplets(&self) -> &[Triplet] {
        &self.latest
    }
}

impl Drop for DiagramController {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Run the layout and settle the viewport on a freshly created instance
fn settle_viewport(
    instance: &mut dyn DiagramInstance,
    layout: &LayoutSpec,
) -> Result<(), TriptychError> {
    instance
        .run_layout(layout)
        .map_err(|e| TriptychError::layout_error(e.to_string()))?;
    instance
        .center()
        .map_err(|e| TriptychError::engine_error(e.to_string()))?;
    instance
        .fit(FIT_PADDING)
        .map_err(|e| TriptychError::engine_error(e.to_string()))?;
    Ok(())
}
