//! Core error types for diagram processing
//!
//! This module defines common error types used throughout the triplet
//! visualization pipeline.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum TriptychError {
    #[error("Payload error: {message}")]
    PayloadError { message: String },

    #[error("Rendering engine is not available")]
    EngineUnavailable,

    #[error("Engine error: {message}")]
    EngineError { message: String },

    #[error("Layout error: {message}")]
    LayoutError { message: String },

    #[error("Snapshot error: {message}")]
    SnapshotError { message: String },

    #[error("Export error: {message}")]
    ExportError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl TriptychError {
    /// Create a new payload error
    pub fn payload_error(message: String) -> Self {
        Self::PayloadError { message }
    }

    /// Create a new engine error
    pub fn engine_error(message: String) -> Self {
        Self::EngineError { message }
    }

    /// Create a new layout error
    pub fn layout_error(message: String) -> Self {
        Self::LayoutError { message }
    }

    /// Create a new snapshot error
    pub fn snapshot_error(message: String) -> Self {
        Self::SnapshotError { message }
    }

    /// Create a new export error
    pub fn export_error(message: String) -> Self {
        Self::ExportError { message }
    }
}
