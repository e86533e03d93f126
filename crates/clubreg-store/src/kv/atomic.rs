//! Atomic file replacement
//!
//! Writes go to a sibling temp file that is then renamed over the target,
//! so readers never see a partial value.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

pub(super) fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }

    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_store_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_store_temp", e))?;

    Ok(())
}
