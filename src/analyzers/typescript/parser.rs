//! Tree-sitter parser integration for TypeScript/TSX
//!
//! Parsing is best-effort: tree-sitter brackets malformed regions in ERROR
//! nodes instead of rejecting the file, so downstream analysis degrades
//! gracefully on fragments. Only a total failure to produce a tree is an
//! error.

use crate::core::ast::{JsLanguageVariant, TypeScriptAst};
use anyhow::{Context, Result};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Parser, Tree};

fn get_language(variant: JsLanguageVariant) -> TsLanguage {
    match variant {
        JsLanguageVariant::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        JsLanguageVariant::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse TypeScript source code into a tree-sitter AST
pub fn parse_source(
    content: &str,
    path: &Path,
    variant: JsLanguageVariant,
) -> Result<TypeScriptAst> {
    let mut parser = Parser::new();
    let language = get_language(variant);

    parser
        .set_language(&language)
        .context("Failed to set tree-sitter language")?;

    let tree = parser
        .parse(content, None)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(TypeScriptAst {
        tree,
        path: path.to_path_buf(),
        source: content.to_string(),
        variant,
    })
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &tree_sitter::Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_typescript() {
        let source = "export interface Greeting { message: string }";
        let path = PathBuf::from("test.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        assert!(!has_parse_errors(&ast.tree));
        assert_eq!(ast.variant, JsLanguageVariant::TypeScript);
        assert_eq!(ast.tree.root_node().kind(), "program");
    }

    #[test]
    fn test_parse_tsx() {
        let source = "export const App = () => <div>Hello</div>;";
        let path = PathBuf::from("App.tsx");
        let ast = parse_source(source, &path, JsLanguageVariant::Tsx).unwrap();

        assert!(!has_parse_errors(&ast.tree));
        assert_eq!(ast.variant, JsLanguageVariant::Tsx);
    }

    #[test]
    fn test_malformed_input_still_yields_tree() {
        let source = "export interface Broken {\n@@@";
        let path = PathBuf::from("broken.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        assert!(has_parse_errors(&ast.tree));
    }

    #[test]
    fn test_node_text() {
        let source = "type Id = string;";
        let path = PathBuf::from("test.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        let root = ast.tree.root_node();
        assert_eq!(node_text(&root, &ast.source), source);
    }
}
