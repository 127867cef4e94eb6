pub mod typescript;

pub use typescript::{classify_source, extract_type_only_exports, parse_source};
