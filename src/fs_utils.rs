use std::io;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::error::Result;

/// Remove whatever sits at `path` so it can be recreated.
///
/// A real directory is removed recursively. A symlink (dangling or not) or
/// a plain file is removed without following it. A missing path is fine.
pub async fn clear_target(path: &Path) -> Result<()> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::filesystem("inspect", path, e)),
    };

    if metadata.is_dir() {
        debug!("Removing directory {}", path.display());
        tokio::fs::remove_dir_all(path)
            .await
            .map_err(|e| Error::filesystem("remove directory", path, e))?;
    } else {
        debug!("Removing link or file {}", path.display());
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| Error::filesystem("remove", path, e))?;
    }

    Ok(())
}

/// Create a symlink at `link` pointing to `target`, creating parents of `link`.
pub async fn create_link(target: &Path, link: &Path) -> Result<()> {
    if let Some(parent) = link.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::filesystem("create directory", parent, e))?;
    }
    tokio::fs::symlink(target, link)
        .await
        .map_err(|e| Error::filesystem("create symlink", link, e))
}
