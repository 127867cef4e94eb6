use crate::analyzers::typescript::{extract_type_only_exports, parse_source};
use crate::commands::collect_source_files;
use crate::config;
use crate::core::ast::JsLanguageVariant;
use crate::io;
use crate::transform::append_shim;
use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct PatchOptions {
    pub src_root: PathBuf,
    pub out_dir: PathBuf,
    pub dry_run: bool,
    pub placeholder: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PatchSummary {
    /// Output files that received a shim, sorted by path
    pub patched: Vec<PathBuf>,
    /// Sources whose transpiled output was absent
    pub missing_outputs: usize,
    /// Sources with nothing to append (no type-only exports, or output
    /// already patched)
    pub unchanged: usize,
}

enum FileOutcome {
    Patched(PathBuf),
    MissingOutput,
    Unchanged,
}

pub fn handle_patch(options: PatchOptions) -> Result<()> {
    let summary = patch_tree(&options, io::fs_reader)?;

    for path in &summary.patched {
        println!("{}", path.display());
    }
    let verb = if options.dry_run { "Would patch" } else { "Patched" };
    println!(
        "{verb} {} files ({} without transpiled output, {} unchanged)",
        summary.patched.len(),
        summary.missing_outputs,
        summary.unchanged
    );

    Ok(())
}

/// Patch the transpiled outputs for every analyzable source under
/// `src_root`. File contents come through the injected `reader` so the
/// orchestration is testable without a filesystem; `None` from the reader
/// means "file does not need processing".
pub fn patch_tree(
    options: &PatchOptions,
    reader: impl Fn(&Path) -> Option<String> + Sync,
) -> Result<PatchSummary> {
    let files = collect_source_files(&options.src_root)?;
    let placeholder = options
        .placeholder
        .clone()
        .unwrap_or_else(|| config::get_config().patch.placeholder.clone());

    let outcomes = files
        .par_iter()
        .map(|src| patch_file(src, options, &placeholder, &reader))
        .collect::<Result<Vec<_>>>()?;

    let mut summary = PatchSummary::default();
    for outcome in outcomes {
        match outcome {
            FileOutcome::Patched(path) => summary.patched.push(path),
            FileOutcome::MissingOutput => summary.missing_outputs += 1,
            FileOutcome::Unchanged => summary.unchanged += 1,
        }
    }
    summary.patched.sort();

    Ok(summary)
}

fn patch_file(
    src: &Path,
    options: &PatchOptions,
    placeholder: &str,
    reader: &(impl Fn(&Path) -> Option<String> + Sync),
) -> Result<FileOutcome> {
    let Some(variant) = JsLanguageVariant::from_path(src) else {
        return Ok(FileOutcome::Unchanged);
    };

    let Some(content) = reader(src) else {
        log::warn!("source unavailable, skipping {}", src.display());
        return Ok(FileOutcome::Unchanged);
    };

    let ast = parse_source(&content, src, variant)?;
    let names = extract_type_only_exports(&ast);
    if names.is_empty() {
        return Ok(FileOutcome::Unchanged);
    }

    let out_path = map_output_path(&options.src_root, &options.out_dir, src);
    let Some(output) = reader(&out_path) else {
        log::info!(
            "no transpiled output for {}, skipping",
            src.display()
        );
        return Ok(FileOutcome::MissingOutput);
    };

    let Some(patched) = append_shim(&output, &names, placeholder) else {
        log::debug!("{} already patched", out_path.display());
        return Ok(FileOutcome::Unchanged);
    };

    log::info!(
        "{}: appending placeholders for {}",
        out_path.display(),
        names.join(", ")
    );
    if !options.dry_run {
        io::write_file(&out_path, &patched)?;
    }

    Ok(FileOutcome::Patched(out_path))
}

/// Map a source file to its transpiled output path:
/// `src_root/rel/foo.ts` becomes `out_root/rel/foo.js`, with module-flavor
/// extensions preserved (`.mts` to `.mjs`, `.cts` to `.cjs`).
pub fn map_output_path(src_root: &Path, out_root: &Path, src: &Path) -> PathBuf {
    let rel = if src == src_root {
        Path::new(src.file_name().unwrap_or(src.as_os_str()))
    } else {
        src.strip_prefix(src_root).unwrap_or(src)
    };

    let ext = match src.extension().and_then(|e| e.to_str()) {
        Some("mts") => "mjs",
        Some("cts") => "cjs",
        _ => "js",
    };

    out_root.join(rel).with_extension(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_path_mapping() {
        let src_root = Path::new("src");
        let out_root = Path::new("dist");

        assert_eq!(
            map_output_path(src_root, out_root, Path::new("src/api/types.ts")),
            PathBuf::from("dist/api/types.js")
        );
        assert_eq!(
            map_output_path(src_root, out_root, Path::new("src/App.tsx")),
            PathBuf::from("dist/App.js")
        );
        assert_eq!(
            map_output_path(src_root, out_root, Path::new("src/mod.mts")),
            PathBuf::from("dist/mod.mjs")
        );
        assert_eq!(
            map_output_path(src_root, out_root, Path::new("src/mod.cts")),
            PathBuf::from("dist/mod.cjs")
        );
    }

    #[test]
    fn test_single_file_mapping_uses_file_name() {
        assert_eq!(
            map_output_path(Path::new("src/a.ts"), Path::new("dist"), Path::new("src/a.ts")),
            PathBuf::from("dist/a.js")
        );
    }
}
