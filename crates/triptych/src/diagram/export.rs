//! Snapshot export
//!
//! PNG snapshots leave the library through an [`ArtifactSink`]. The bundled
//! sink writes into a directory; embedders can deliver artifacts any other
//! way (download prompts, uploads, message buses) by implementing the trait.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

/// Media type of exported snapshots
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Filename for a snapshot taken at `timestamp`
///
/// The timestamp keeps RFC 3339 ordering but swaps colons and dots for
/// dashes so the name is safe on every filesystem.
///
/// # Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use triptych::diagram::export_filename;
///
/// let taken = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
/// assert_eq!(
///     export_filename(taken),
///     "knowledge-graph-2024-05-01T12-30-45-000Z.png"
/// );
/// ```
pub fn export_filename(timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-")
        .replace('.', "-");
    format!("knowledge-graph-{}.png", stamp)
}

/// A finished export ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename, unique per capture time
    pub filename: String,
    /// MIME type of `bytes`
    pub media_type: String,
    /// Encoded image data
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Create a PNG artifact with the standard media type
    pub fn png(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            media_type: PNG_MEDIA_TYPE.to_string(),
            bytes,
        }
    }
}

/// Destination for exported artifacts
pub trait ArtifactSink {
    /// Deliver one artifact
    fn deliver(&mut self, artifact: ExportArtifact) -> Result<()>;
}

/// Sink that writes artifacts into a directory
///
/// The directory must already exist; delivery does not create it.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    directory: PathBuf,
}

impl FileSystemSink {
    /// Create a sink writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ArtifactSink for FileSystemSink {
    fn deliver(&mut self, artifact: ExportArtifact) -> Result<()> {
        let path = self.directory.join(&artifact.filename);
        fs::write(&path, &artifact.bytes)
            .map_err(|e| anyhow!("Failed to write export '{}': {}", path.display(), e))?;
        info!(path = %path.display(), bytes = artifact.bytes.len(), "Export written");
        Ok(())
    }
}
