//! TypeScript/TSX source analysis

pub mod exports;
pub mod parser;

pub use exports::{classify_source, extract_type_only_exports};
pub use parser::{has_parse_errors, node_text, parse_source};
