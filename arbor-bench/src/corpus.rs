//! Source corpus discovery
//!
//! Walks a directory tree, collects every file with the requested
//! extension, and reads the contents up front. Enumeration order is
//! stable (sorted by path) so repeated runs measure the same sequence of
//! parses. Traversal and read failures are fatal; the harness never
//! reports metrics over a partially read corpus.

use crate::error::BenchError;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered source file, contents fully in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Collect all files under `directory` whose extension is `extension`,
/// sorted by path.
pub fn discover(directory: &Path, extension: &str) -> Result<Vec<SourceFile>, BenchError> {
    if !directory.is_dir() {
        return Err(BenchError::InvalidInput(format!(
            "not a directory: {}",
            directory.display()
        )));
    }

    let mut walker = WalkBuilder::new(directory);
    // Measure everything on disk; ignore files would make the corpus
    // depend on repository configuration.
    walker.standard_filters(false);
    walker.sort_by_file_path(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|err| BenchError::Io {
            path: directory.to_path_buf(),
            message: err.to_string(),
        })?;
        if !entry.file_type().map_or(false, |file_type| file_type.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        let contents = fs::read(&path).map_err(|err| BenchError::Io {
            path: path.clone(),
            message: err.to_string(),
        })?;
        files.push(SourceFile { path, contents });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_matching_files_sorted_by_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.rs"), "fn b() {}").unwrap();
        fs::write(dir.path().join("a.rs"), "fn a() {}").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.rs"), "fn c() {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "not source").unwrap();

        let files = discover(dir.path(), "rs").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|file| {
                file.path
                    .strip_prefix(dir.path())
                    .unwrap()
                    .display()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["a.rs", "b.rs", "nested/c.rs"]);
        assert_eq!(files[0].contents, b"fn a() {}");
    }

    #[test]
    fn empty_directory_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let files = discover(dir.path(), "rs").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_directory_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        match discover(&missing, "rs") {
            Err(BenchError::InvalidInput(message)) => {
                assert!(message.contains("not a directory"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn hidden_files_are_not_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden.rs"), "fn hidden() {}").unwrap();
        let files = discover(dir.path(), "rs").unwrap();
        assert_eq!(files.len(), 1);
    }
}
