pub mod walker;

pub use walker::SourceWalker;

use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::file_system_source("failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_system_source("failed to write file", path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system_source("failed to create directory", path, e))?;
    }
    Ok(())
}

/// Reader capability for orchestration code: a function from path to
/// optional content. `None` means the file does not need processing, never
/// a hard error. Tests substitute an in-memory map for this.
pub fn fs_reader(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}
