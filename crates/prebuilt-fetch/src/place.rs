//! Atomic placement of the decompressed artifact.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::WriteError;

/// Write `content` to `path`, creating parent directories.
///
/// The bytes land in a sibling temp file first and are renamed into place, so
/// `path` never holds a partial artifact.
pub async fn write_artifact(path: &Path, content: &[u8]) -> Result<(), WriteError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .await
        .map_err(|source| WriteError {
            path: parent.clone(),
            source,
        })?;

    let tmp_path = parent.join(format!(".tmp.{}.prebuilt", uuid::Uuid::new_v4()));
    if let Err(source) = fs::write(&tmp_path, content).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(WriteError {
            path: tmp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(WriteError {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(path = %path.display(), bytes = content.len(), "artifact written");
    Ok(())
}
