use std::path::Path;

use crate::store::StoreError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), StoreError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dirspath).map_err(|e| StoreError::CreateDirectoryError {
        directory: dirspath.to_str().unwrap_or_default().to_string(),
        source: e,
    })
}
