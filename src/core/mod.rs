pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One exported name observed while scanning a file.
///
/// Entries are keyed by the externally visible name (`exported_name`); the
/// `local_name` is what set lookups resolve against, so `export { T as U }`
/// checks `T` against the declaration sets but emits `U`. Repeated sightings
/// of the same exported name merge with OR semantics on both flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub exported_name: String,
    pub local_name: String,
    pub as_type: bool,
    pub as_value: bool,
}

impl ExportEntry {
    pub fn new(
        exported_name: impl Into<String>,
        local_name: impl Into<String>,
        as_type: bool,
        as_value: bool,
    ) -> Self {
        Self {
            exported_name: exported_name.into(),
            local_name: local_name.into(),
            as_type,
            as_value,
        }
    }

    /// Merge another sighting of the same exported name into this entry.
    pub fn merge(&mut self, other: &ExportEntry) {
        self.as_type |= other.as_type;
        self.as_value |= other.as_value;
    }
}

/// Per-file analysis result: the exported names that are types with no
/// runtime binding, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub type_only_exports: Vec<String>,
}

impl FileReport {
    pub fn name_count(&self) -> usize {
        self.type_only_exports.len()
    }
}

/// Aggregate result of analyzing a source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    /// Files that need shims, sorted by path. Files with no type-only
    /// exports are counted in `files_scanned` but not listed here.
    pub files: Vec<FileReport>,
}

impl AnalysisReport {
    pub fn total_names(&self) -> usize {
        self.files.iter().map(FileReport::name_count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_merge_or_semantics() {
        let mut entry = ExportEntry::new("A", "A", true, false);
        entry.merge(&ExportEntry::new("A", "A", false, true));
        assert!(entry.as_type);
        assert!(entry.as_value);
    }

    #[test]
    fn test_report_totals() {
        let report = AnalysisReport {
            root: PathBuf::from("src"),
            files_scanned: 3,
            files: vec![
                FileReport {
                    path: PathBuf::from("src/a.ts"),
                    type_only_exports: vec!["A".to_string(), "B".to_string()],
                },
                FileReport {
                    path: PathBuf::from("src/b.ts"),
                    type_only_exports: vec!["C".to_string()],
                },
            ],
        };
        assert_eq!(report.total_names(), 3);
        assert!(!report.is_clean());
    }
}
