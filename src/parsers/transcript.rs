use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Split};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::parse_record;
use crate::error::{QueryError, QueryResult};
use crate::models::TranscriptEntry;

/// Streaming reader over the decoded entries of one transcript file
///
/// Yields `(line_position, entry)` pairs. Positions are 1-based and count every raw line,
/// including blank and malformed ones, so they stay stable whatever is filtered later.
pub struct TranscriptReader {
    path: PathBuf,
    lines: Split<BufReader<File>>,
    position: usize,
    skipped: usize,
}

impl TranscriptReader {
    pub fn open(path: &Path) -> QueryResult<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => QueryError::FileNotFound(path.to_path_buf()),
            _ => QueryError::io(path, e),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).split(b'\n'),
            position: 0,
            skipped: 0,
        })
    }
}

impl Iterator for TranscriptReader {
    type Item = QueryResult<(usize, TranscriptEntry)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(QueryError::io(&self.path, e))),
            };
            self.position += 1;

            // Invalid UTF-8 is just another malformed line
            let Ok(line) = String::from_utf8(bytes) else {
                self.skipped += 1;
                debug!(path = %self.path.display(), line = self.position, "skipping non-UTF-8 line");
                continue;
            };

            if line.trim().is_empty() {
                continue;
            }

            match parse_record(&line) {
                Some(entry) => return Some(Ok((self.position, entry))),
                None => {
                    self.skipped += 1;
                    debug!(path = %self.path.display(), line = self.position, "skipping malformed line");
                }
            }
        }
    }
}

impl Drop for TranscriptReader {
    fn drop(&mut self) {
        if self.skipped > 0 {
            debug!(
                path = %self.path.display(),
                lines = self.position,
                skipped = self.skipped,
                "finished reading transcript"
            );
        }
    }
}

/// Read every decodable entry of a transcript, paired with its raw line position
pub fn read_transcript_entries(path: &Path) -> QueryResult<Vec<(usize, TranscriptEntry)>> {
    TranscriptReader::open(path)?.collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::EntryRole;

    /// Helper to create a temporary test file with given content
    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_positions_count_raw_lines() {
        let content = b"{\"type\":\"user\",\"message\":{\"content\":\"hi\"}}\n\
            \n\
            not json\n\
            {\"type\":\"assistant\",\"message\":{\"content\":[]}}\n";
        let file = create_test_file(content);

        let entries = read_transcript_entries(file.path()).unwrap();
        let positions: Vec<usize> = entries.iter().map(|(line, _)| *line).collect();
        assert_eq!(positions, vec![1, 4]);
        assert_eq!(entries[1].1.role(), EntryRole::Assistant);
    }

    #[test]
    fn test_malformed_lines_do_not_shift_positions() {
        let clean = create_test_file(b"{\"type\":\"user\"}\n{\"type\":\"user\"}\n{\"type\":\"user\"}");
        let dirty = create_test_file(b"{\"type\":\"user\"}\n{broken\n{\"type\":\"user\"}");

        let clean_positions: Vec<usize> =
            read_transcript_entries(clean.path()).unwrap().iter().map(|(l, _)| *l).collect();
        let dirty_positions: Vec<usize> =
            read_transcript_entries(dirty.path()).unwrap().iter().map(|(l, _)| *l).collect();

        assert_eq!(clean_positions, vec![1, 2, 3]);
        assert_eq!(dirty_positions, vec![1, 3]);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let file = create_test_file(b"\xff\xfe\n{\"type\":\"user\"}\n");
        let entries = read_transcript_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, 2);
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline() {
        let file = create_test_file(b"{\"type\":\"user\"}\r\n{\"type\":\"assistant\"}");
        let entries = read_transcript_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].0, 2);
    }

    #[test]
    fn test_empty_file() {
        let file = create_test_file(b"");
        assert!(read_transcript_entries(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_nonexistent_file() {
        let result = read_transcript_entries(Path::new("/nonexistent/2026-01-01-abc.jsonl"));
        assert!(matches!(result, Err(QueryError::FileNotFound(_))));
    }
}
