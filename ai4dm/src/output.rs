//! Report output.

use ai4dm_core::{QualityError, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Writes the rendered report to `output`, or to stdout when no path is given.
///
/// # Errors
/// Returns [`QualityError::Io`] if writing fails.
pub async fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, report).await.map_err(|e| {
                QualityError::io(format!("Failed to write to {}", path.display()), e)
            })?;
            tracing::info!("✓ Report saved to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(report.as_bytes())
                .await
                .map_err(|e| QualityError::io("Failed to write to stdout", e))?;
            stdout
                .flush()
                .await
                .map_err(|e| QualityError::io("Failed to flush stdout", e))?;
        }
    }
    Ok(())
}
