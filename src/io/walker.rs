use crate::core::ast::JsLanguageVariant;
use crate::core::errors::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Walks a source tree for analyzable TypeScript files.
///
/// Selection is two-staged: the extension rule (TypeScript family only, no
/// plain JavaScript, no `.d.ts`) plus user-configured ignore globs. Results
/// are sorted so report ordering is deterministic.
pub struct SourceWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                crate::core::errors::Error::file_system(e.to_string(), &self.root)
            })?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if JsLanguageVariant::from_path(path).is_none() {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

pub fn find_source_files(root: &Path, ignore_patterns: Vec<String>) -> Result<Vec<PathBuf>> {
    SourceWalker::new(root.to_path_buf())
        .with_ignore_patterns(ignore_patterns)
        .walk()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {};\n").unwrap();
    }

    #[test]
    fn test_walk_selects_typescript_family_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/a.ts");
        touch(dir.path(), "src/b.tsx");
        touch(dir.path(), "src/c.js");
        touch(dir.path(), "src/d.d.ts");
        touch(dir.path(), "src/styles.css");

        let files = find_source_files(dir.path(), vec![]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.ts", "b.tsx"]);
    }

    #[test]
    fn test_ignore_patterns_exclude_matches() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/a.ts");
        touch(dir.path(), "vendor/b.ts");

        let pattern = format!("{}/vendor/**", dir.path().to_string_lossy());
        let files = find_source_files(dir.path(), vec![pattern]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/a.ts"));
    }

    #[test]
    fn test_walk_output_is_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "z.ts");
        touch(dir.path(), "a.ts");
        touch(dir.path(), "m.ts");

        let files = find_source_files(dir.path(), vec![]).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
