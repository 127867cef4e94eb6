use crate::analyzers::typescript::{extract_type_only_exports, parse_source};
use crate::cli::OutputFormat;
use crate::commands::collect_source_files;
use crate::core::ast::JsLanguageVariant;
use crate::core::{AnalysisReport, FileReport};
use crate::io;
use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct AnalyzeOptions {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(options: AnalyzeOptions) -> Result<()> {
    let report = analyze_path(&options.path)?;

    let rendered = match options.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        OutputFormat::Terminal => render_terminal(&report),
    };

    match &options.output {
        Some(path) => io::write_file(path, &rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Analyze a file or directory tree. Files are independent, so the scan
/// fans out per file; results come back in walk order.
pub fn analyze_path(root: &Path) -> Result<AnalysisReport> {
    let files = collect_source_files(root)?;

    let reports = files
        .par_iter()
        .map(|path| analyze_file(path))
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalysisReport {
        root: root.to_path_buf(),
        files_scanned: files.len(),
        files: reports.into_iter().flatten().collect(),
    })
}

/// Classify one file. An unreadable file means "does not need processing"
/// and is skipped; a parser that produces no tree at all is fatal, since
/// silently dropping a file could leave corrupt build output in place.
fn analyze_file(path: &Path) -> Result<Option<FileReport>> {
    let Some(variant) = JsLanguageVariant::from_path(path) else {
        return Ok(None);
    };

    let content = match io::read_file(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("skipping {}: {e}", path.display());
            return Ok(None);
        }
    };

    let ast = parse_source(&content, path, variant)?;
    let names = extract_type_only_exports(&ast);

    if names.is_empty() {
        log::debug!("{}: no type-only exports", path.display());
        return Ok(None);
    }

    Ok(Some(FileReport {
        path: path.to_path_buf(),
        type_only_exports: names,
    }))
}

fn render_terminal(report: &AnalysisReport) -> String {
    let mut out = String::new();

    for file in &report.files {
        out.push_str(&format!(
            "{}: {}\n",
            file.path.display(),
            file.type_only_exports.join(", ")
        ));
    }

    let needs = report.files.len();
    out.push_str(&format!(
        "{} files scanned, {} need shims ({} names)\n",
        report.files_scanned,
        needs,
        report.total_names()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_analyze_path_reports_only_affected_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("types.ts"),
            "export interface User { id: number }\n",
        )
        .unwrap();
        fs::write(dir.path().join("values.ts"), "export const n = 1;\n").unwrap();

        let report = analyze_path(dir.path()).unwrap();
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.files.len(), 1);
        assert!(report.files[0].path.ends_with("types.ts"));
        assert_eq!(report.files[0].type_only_exports, vec!["User"]);
    }

    #[test]
    fn test_analyze_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("api.ts");
        fs::write(&file, "export type Payload = { body: string };\n").unwrap();

        let report = analyze_path(&file).unwrap();
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.files[0].type_only_exports, vec!["Payload"]);
    }

    #[test]
    fn test_analyze_missing_root_is_fatal() {
        assert!(analyze_path(Path::new("/nonexistent/typeshim-src")).is_err());
    }

    #[test]
    fn test_terminal_rendering() {
        let report = AnalysisReport {
            root: PathBuf::from("src"),
            files_scanned: 2,
            files: vec![FileReport {
                path: PathBuf::from("src/a.ts"),
                type_only_exports: vec!["A".to_string(), "B".to_string()],
            }],
        };
        let rendered = render_terminal(&report);
        assert!(rendered.contains("src/a.ts: A, B"));
        assert!(rendered.contains("2 files scanned, 1 need shims (2 names)"));
    }
}
