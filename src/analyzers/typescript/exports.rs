//! Export classification for TypeScript/TSX
//!
//! Determines which exported names of a file are types with no runtime
//! binding. Per-file transpilers erase `interface` and `type` declarations,
//! so a name that is only ever a type leaves a dangling export behind; the
//! names collected here are the ones that need a synthesized placeholder.
//!
//! The analysis is file-local: re-exports that carry a module specifier
//! (`export { X } from './mod'`) cannot be resolved without cross-file
//! information and are skipped.

use crate::analyzers::typescript::parser::{node_text, parse_source};
use crate::core::ast::{JsLanguageVariant, TypeScriptAst};
use crate::core::ExportEntry;
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tree_sitter::Node;

/// Top-level declaration kinds that participate in export classification.
/// Everything else (imports, expression statements, ambient declarations,
/// namespaces, ERROR nodes from malformed input) falls into `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclKind {
    TypeAlias,
    Interface,
    Variable,
    Function,
    Class,
    Enum,
    Export,
    Ignored,
}

impl DeclKind {
    fn from_node_kind(kind: &str) -> Self {
        match kind {
            "type_alias_declaration" => Self::TypeAlias,
            "interface_declaration" => Self::Interface,
            "lexical_declaration" | "variable_declaration" => Self::Variable,
            "function_declaration" | "generator_function_declaration" => Self::Function,
            "class_declaration" | "abstract_class_declaration" => Self::Class,
            "enum_declaration" => Self::Enum,
            "export_statement" => Self::Export,
            _ => Self::Ignored,
        }
    }
}

/// Accumulator threaded through one file scan: which names resolve to a
/// type declaration, which to a value declaration, and every export entry
/// seen so far (first-seen order, OR-merged on repeated names).
#[derive(Debug, Default)]
struct ExportScan {
    type_names: HashSet<String>,
    value_names: HashSet<String>,
    entries: Vec<ExportEntry>,
}

impl ExportScan {
    fn declare_type(&mut self, name: &str) {
        self.type_names.insert(name.to_string());
    }

    fn declare_value(&mut self, name: &str) {
        self.value_names.insert(name.to_string());
    }

    fn record_export(&mut self, entry: ExportEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.exported_name == entry.exported_name)
        {
            Some(existing) => existing.merge(&entry),
            None => self.entries.push(entry),
        }
    }

    /// Apply the inclusion rule: a name needs a placeholder iff its local
    /// declaration is a type and no runtime value satisfies the export.
    fn type_only_names(self) -> Vec<String> {
        let ExportScan {
            type_names,
            value_names,
            entries,
        } = self;

        entries
            .into_iter()
            .filter(|e| type_names.contains(&e.local_name))
            .filter(|e| !(e.as_value && value_names.contains(&e.local_name)))
            .map(|e| e.exported_name)
            .collect()
    }
}

/// Collect the exported names of a file that are types without a runtime
/// binding, in first-seen order.
pub fn extract_type_only_exports(ast: &TypeScriptAst) -> Vec<String> {
    let mut scan = ExportScan::default();
    let root = ast.tree.root_node();

    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        scan_statement(&statement, ast, &mut scan, false);
    }

    scan.type_only_names()
}

/// Classify a source fragment directly. This is the full pipeline for one
/// file: best-effort parse, then export classification.
pub fn classify_source(content: &str, variant: JsLanguageVariant) -> Result<Vec<String>> {
    let ast = parse_source(content, Path::new("<input>"), variant)?;
    Ok(extract_type_only_exports(&ast))
}

fn scan_statement(node: &Node, ast: &TypeScriptAst, scan: &mut ExportScan, exported: bool) {
    match DeclKind::from_node_kind(node.kind()) {
        DeclKind::TypeAlias | DeclKind::Interface => {
            if let Some(name) = declared_name(node, ast) {
                scan.declare_type(&name);
                if exported {
                    scan.record_export(ExportEntry::new(name.clone(), name, true, false));
                }
            }
        }
        DeclKind::Variable => scan_variable_declaration(node, ast, scan, exported),
        DeclKind::Function => {
            if let Some(name) = declared_name(node, ast) {
                scan.declare_value(&name);
                if exported {
                    scan.record_export(ExportEntry::new(name.clone(), name, false, true));
                }
            }
        }
        // Classes and enums are simultaneously types and values
        DeclKind::Class | DeclKind::Enum => {
            if let Some(name) = declared_name(node, ast) {
                scan.declare_type(&name);
                scan.declare_value(&name);
                if exported {
                    scan.record_export(ExportEntry::new(name.clone(), name, true, true));
                }
            }
        }
        DeclKind::Export => scan_export_statement(node, ast, scan),
        DeclKind::Ignored => {}
    }
}

fn scan_variable_declaration(node: &Node, ast: &TypeScriptAst, scan: &mut ExportScan, exported: bool) {
    let mut cursor = node.walk();
    for declarator in node.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        // Only simple named bindings participate; destructuring patterns
        // cannot collide with an erased type declaration.
        if name_node.kind() != "identifier" {
            continue;
        }
        let name = node_text(&name_node, &ast.source).to_string();
        scan.declare_value(&name);
        if exported {
            scan.record_export(ExportEntry::new(name.clone(), name, false, true));
        }
    }
}

fn scan_export_statement(node: &Node, ast: &TypeScriptAst, scan: &mut ExportScan) {
    // Re-exports from another module are out of scope for file-local
    // analysis; the forwarded names contribute nothing here.
    if node.child_by_field_name("source").is_some() {
        return;
    }

    let mut statement_type_only = false;
    let mut is_default = false;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.is_named() {
            match child.kind() {
                "type" => statement_type_only = true,
                "default" => is_default = true,
                _ => {}
            }
        }
    }

    if let Some(declaration) = node.child_by_field_name("declaration") {
        // `export default class Foo {}` binds Foo locally but exports it
        // under `default`, so no named export entry is recorded for it.
        scan_statement(&declaration, ast, scan, !is_default);
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "export_clause" {
            scan_export_clause(&child, ast, scan, statement_type_only);
        }
    }
}

fn scan_export_clause(clause: &Node, ast: &TypeScriptAst, scan: &mut ExportScan, statement_type_only: bool) {
    let mut cursor = clause.walk();
    for specifier in clause.named_children(&mut cursor) {
        if specifier.kind() != "export_specifier" {
            continue;
        }
        let Some(name_node) = specifier.child_by_field_name("name") else {
            continue;
        };
        let local = node_text(&name_node, &ast.source).to_string();
        let exported = specifier
            .child_by_field_name("alias")
            .map(|alias| node_text(&alias, &ast.source).to_string())
            .unwrap_or_else(|| local.clone());

        let type_only = statement_type_only || has_inline_type_marker(&specifier);
        scan.record_export(ExportEntry::new(exported, local, true, !type_only));
    }
}

/// `export { type T }` marks a single specifier as type-only.
fn has_inline_type_marker(specifier: &Node) -> bool {
    let mut cursor = specifier.walk();
    let has_type = specifier
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "type");
    has_type
}

fn declared_name(node: &Node, ast: &TypeScriptAst) -> Option<String> {
    node.child_by_field_name("name")
        .map(|name| node_text(&name, &ast.source).to_string())
}
