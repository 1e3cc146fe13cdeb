//! Writing downloaded assets to disk

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use streamline_core::download::DownloadedAsset;
use tempfile::NamedTempFile;

/// Store `asset` as `dir/<asset.filename>`, creating `dir` when needed.
///
/// The bytes go to a temporary file in the same directory first, so an
/// interrupted write never leaves a truncated file under the final name.
pub fn save_asset(dir: &Path, asset: &DownloadedAsset) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let target = dir.join(&asset.filename);
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    temp.write_all(&asset.bytes)?;
    temp.flush()?;
    temp.persist(&target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    log::debug!("Wrote {} bytes to {}", asset.bytes.len(), target.display());
    Ok(target)
}
