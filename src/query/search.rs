use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::{DEFAULT_CONTEXT, DEFAULT_SEARCH_LIMIT, QueryOptions, discover_transcripts, filtered_lines};
use crate::error::{QueryError, QueryResult};
use crate::models::{FormattedLine, SearchMatch, SearchResults};
use crate::utils::file_date;

/// A compiled pattern search
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pattern: Regex,
    /// Skip transcripts whose file-name date is before this instant
    pub cutoff: Option<NaiveDateTime>,
    pub limit: usize,
    /// Filtered neighbours reported on each side of a match
    pub context: usize,
}

impl SearchQuery {
    /// Compile `pattern` as a case-insensitive regular expression
    pub fn new(pattern: &str) -> QueryResult<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build().map_err(|source| {
            QueryError::InvalidPattern { pattern: pattern.to_string(), source }
        })?;

        Ok(Self { pattern, cutoff: None, limit: DEFAULT_SEARCH_LIMIT, context: DEFAULT_CONTEXT })
    }

    pub fn with_cutoff(mut self, cutoff: Option<NaiveDateTime>) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    fn is_before_cutoff(&self, path: &Path) -> bool {
        let Some(cutoff) = self.cutoff else {
            return false;
        };
        // Files without a parseable date are always searched
        file_date(path).and_then(|date| date.and_hms_opt(0, 0, 0)).is_some_and(|start| start < cutoff)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Continue,
    LimitReached,
}

/// Search the archive in `dir`, newest transcript first
///
/// Matches are reported in scan order: files by descending name, then ascending line
/// position within a file. Scanning stops as soon as `query.limit` matches are collected;
/// later files are never opened.
///
/// # Errors
///
/// Returns [`QueryError::MissingTranscriptDir`] if `dir` does not exist, or an I/O error if
/// a transcript cannot be read.
pub fn search_transcripts(
    dir: &Path,
    query: &SearchQuery,
    options: &QueryOptions,
) -> QueryResult<SearchResults> {
    let files = discover_transcripts(dir)?;
    let mut results = SearchResults::default();

    for path in files {
        if results.matches.len() >= query.limit {
            break;
        }
        if query.is_before_cutoff(&path) {
            debug!(path = %path.display(), "skipping transcript older than cutoff");
            continue;
        }

        results.files_scanned += 1;
        if scan_file(&path, query, options, &mut results.matches)? == ScanState::LimitReached {
            debug!(matches = results.matches.len(), "search limit reached");
            break;
        }
    }

    Ok(results)
}

fn scan_file(
    path: &Path,
    query: &SearchQuery,
    options: &QueryOptions,
    matches: &mut Vec<SearchMatch>,
) -> QueryResult<ScanState> {
    let lines = filtered_lines(path, options)?;
    for formatted in &lines {
        if !query.pattern.is_match(&formatted.text) {
            continue;
        }

        matches.push(SearchMatch {
            file: PathBuf::from(path),
            line: formatted.line,
            text: formatted.text.clone(),
            context: context_around(&lines, formatted.line, query.context),
        });

        if matches.len() >= query.limit {
            return Ok(ScanState::LimitReached);
        }
    }

    Ok(ScanState::Continue)
}

/// Up to `context` filtered neighbours on each side of the entry at `line`
fn context_around(lines: &[FormattedLine], line: usize, context: usize) -> Vec<String> {
    if context == 0 {
        return Vec::new();
    }
    let Some(index) = lines.iter().position(|l| l.line == line) else {
        return Vec::new();
    };

    let start = index.saturating_sub(context);
    let end = index.saturating_add(context).saturating_add(1).min(lines.len());
    (start..end).filter(|&i| i != index).map(|i| lines[i].text.clone()).collect()
}
