pub mod analyze;
pub mod init;
pub mod patch;

use crate::config;
use crate::core::ast::JsLanguageVariant;
use crate::io::walker::find_source_files;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolve a command's path argument into the list of analyzable source
/// files: a directory is walked with the configured ignore patterns, a
/// single file is accepted as-is when the selection rule matches it.
pub(crate) fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        if JsLanguageVariant::from_path(root).is_none() {
            log::warn!(
                "{} is not an analyzable TypeScript file, nothing to do",
                root.display()
            );
            return Ok(vec![]);
        }
        return Ok(vec![root.to_path_buf()]);
    }

    if !root.is_dir() {
        anyhow::bail!("source path not found: {}", root.display());
    }

    let patterns = config::get_config().ignore.patterns.clone();
    Ok(find_source_files(root, patterns)?)
}
