// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod transform;

// Re-export commonly used types
pub use crate::core::ast::{JsLanguageVariant, TypeScriptAst};
pub use crate::core::{AnalysisReport, ExportEntry, FileReport};

pub use crate::analyzers::typescript::{
    classify_source, extract_type_only_exports, parse_source,
};

pub use crate::commands::analyze::analyze_path;
pub use crate::commands::patch::{map_output_path, patch_tree, PatchOptions, PatchSummary};

pub use crate::transform::{append_shim, is_patched, synthesize_shim, SHIM_MARKER};
