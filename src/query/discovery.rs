use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{QueryError, QueryResult};
use crate::utils::is_transcript_file;

/// List the transcripts of an archive directory, most recent first
///
/// Only regular `*.jsonl` files directly inside `dir` are considered. The date-prefixed
/// naming scheme makes descending file-name order equal to newest-session-first.
///
/// # Errors
///
/// Returns [`QueryError::MissingTranscriptDir`] if `dir` does not exist or is not a directory.
/// Unreadable directory entries are logged and skipped.
pub fn discover_transcripts(dir: &Path) -> QueryResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(QueryError::MissingTranscriptDir(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_transcript_file(path))
        .collect();

    files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    debug!(dir = %dir.display(), count = files.len(), "discovered transcripts");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sorted_descending_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["2026-01-05-b.jsonl", "2026-03-01-a.jsonl", "2025-12-31-z.jsonl", "notes.txt"]
        {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("2027-01-01-dir.jsonl")).unwrap();

        let names: Vec<String> = discover_transcripts(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["2026-03-01-a.jsonl", "2026-01-05-b.jsonl", "2025-12-31-z.jsonl"]);
    }

    #[test]
    fn test_nested_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("old")).unwrap();
        fs::write(dir.path().join("old").join("2020-01-01-x.jsonl"), "").unwrap();

        assert!(discover_transcripts(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("transcripts");
        assert!(matches!(
            discover_transcripts(&missing),
            Err(QueryError::MissingTranscriptDir(path)) if path == missing
        ));
    }
}
