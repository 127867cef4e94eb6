use std::path::{Path, PathBuf};

/// Syntax mode for a TypeScript source file.
///
/// `Tsx` permits embedded markup and is selected for `x`-suffixed
/// extensions; everything else in the TypeScript family parses in the
/// plain grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsLanguageVariant {
    TypeScript,
    Tsx,
}

impl JsLanguageVariant {
    /// Determine the variant for a file path, applying the selection rule:
    /// plain JavaScript extensions (`js`, `jsx`, `mjs`, `cjs`) carry no
    /// erased type declarations and are never analyzed, and `.d.ts`
    /// declaration files have no transpiled runtime counterpart.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        if file_name.ends_with(".d.ts")
            || file_name.ends_with(".d.mts")
            || file_name.ends_with(".d.cts")
        {
            return None;
        }

        match path.extension()?.to_str()? {
            "ts" | "mts" | "cts" => Some(JsLanguageVariant::TypeScript),
            "tsx" => Some(JsLanguageVariant::Tsx),
            _ => None,
        }
    }

    pub fn permits_markup(&self) -> bool {
        matches!(self, JsLanguageVariant::Tsx)
    }
}

/// A parsed TypeScript source file.
///
/// The tree is best-effort: malformed regions parse into ERROR nodes
/// rather than failing the whole file.
#[derive(Clone)]
pub struct TypeScriptAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
    pub variant: JsLanguageVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_for_typescript_family() {
        assert_eq!(
            JsLanguageVariant::from_path(Path::new("src/index.ts")),
            Some(JsLanguageVariant::TypeScript)
        );
        assert_eq!(
            JsLanguageVariant::from_path(Path::new("mod.mts")),
            Some(JsLanguageVariant::TypeScript)
        );
        assert_eq!(
            JsLanguageVariant::from_path(Path::new("mod.cts")),
            Some(JsLanguageVariant::TypeScript)
        );
        assert_eq!(
            JsLanguageVariant::from_path(Path::new("App.tsx")),
            Some(JsLanguageVariant::Tsx)
        );
    }

    #[test]
    fn test_javascript_files_are_excluded() {
        assert_eq!(JsLanguageVariant::from_path(Path::new("index.js")), None);
        assert_eq!(JsLanguageVariant::from_path(Path::new("App.jsx")), None);
        assert_eq!(JsLanguageVariant::from_path(Path::new("mod.mjs")), None);
        assert_eq!(JsLanguageVariant::from_path(Path::new("mod.cjs")), None);
    }

    #[test]
    fn test_declaration_files_are_excluded() {
        assert_eq!(JsLanguageVariant::from_path(Path::new("types.d.ts")), None);
        assert_eq!(JsLanguageVariant::from_path(Path::new("types.d.mts")), None);
    }

    #[test]
    fn test_unrelated_files_are_excluded() {
        assert_eq!(JsLanguageVariant::from_path(Path::new("README.md")), None);
        assert_eq!(JsLanguageVariant::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_tsx_permits_markup() {
        assert!(JsLanguageVariant::Tsx.permits_markup());
        assert!(!JsLanguageVariant::TypeScript.permits_markup());
    }
}
