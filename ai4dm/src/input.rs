//! Concurrent file reading.
//!
//! Every input is read in full before analysis starts. Bytes that are not
//! valid UTF-8 are replaced rather than rejected.

use ai4dm_core::{QualityError, Result};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};

/// The text of one input file, or the error that prevented reading it.
#[derive(Debug)]
pub struct InputFile {
    /// Path as given on the command line
    pub path: PathBuf,
    /// Decoded contents
    pub content: Result<String>,
}

impl InputFile {
    /// File name shown in reports; falls back to the full path.
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Reads one file and decodes it as lossy UTF-8.
///
/// # Errors
/// Returns [`QualityError::Io`] if the file cannot be read.
pub async fn read_lossy(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| QualityError::io(format!("Failed to read {}", path.display()), e))?;

    let text = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(text)
}

/// Files read at the same time.
pub const MAX_CONCURRENT_READS: usize = 8;

/// Reads all files concurrently, keeping the given order.
pub async fn read_inputs(paths: &[PathBuf]) -> Vec<InputFile> {
    let reads = paths.iter().map(|path| async move {
        InputFile {
            path: path.clone(),
            content: read_lossy(path).await,
        }
    });

    stream::iter(reads)
        .buffered(MAX_CONCURRENT_READS)
        .collect()
        .await
}
