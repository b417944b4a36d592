//! Read-only queries over a transcript archive
//!
//! Every query runs the same per-file pipeline:
//! [`TranscriptReader`] → [`FilterPipeline`] → [`format_entry`], producing the file's
//! *filtered sequence* of [`FormattedLine`]s. The range reader and the pattern searcher
//! select from that sequence; the session lister reads entries directly.
//!
//! Files are opened one at a time and read to the end (or to the first useful entry for the
//! session lister) before the next one is touched.

pub mod discovery;
pub mod range;
pub mod search;
pub mod sessions;

use std::path::Path;

pub use discovery::discover_transcripts;
pub use range::{Selector, read_section};
pub use search::{SearchQuery, search_transcripts};
pub use sessions::{PREVIEW_CHARS, list_sessions, summarize_session};

use crate::error::QueryResult;
use crate::filters::{FilterOptions, FilterPipeline};
use crate::format::{FormatOptions, OutputMode, format_entry};
use crate::models::FormattedLine;
use crate::parsers::TranscriptReader;

/// Entries returned by a file read when no limit is given
pub const DEFAULT_READ_LIMIT: usize = 50;
/// Matches returned by a search when no limit is given
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
/// Filtered neighbours shown on each side of a search match
pub const DEFAULT_CONTEXT: usize = 1;

/// Filtering and formatting settings shared by every query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub filters: FilterOptions,
    pub format: FormatOptions,
}

impl QueryOptions {
    /// Text-only queries render extracted text; everything else renders structured records
    pub fn new(filters: FilterOptions, include_thinking: bool) -> Self {
        let mode = if filters.text_only { OutputMode::Extracted } else { OutputMode::Structured };
        Self { filters, format: FormatOptions { mode, include_thinking } }
    }

    pub fn pipeline(&self) -> FilterPipeline {
        FilterPipeline::from(&self.filters)
    }
}

/// A missing or zero limit means "use the default"
pub fn resolve_limit(limit: Option<usize>, default: usize) -> usize {
    limit.filter(|&n| n > 0).unwrap_or(default)
}

/// Compute the filtered, formatted sequence of one transcript
pub fn filtered_lines(path: &Path, options: &QueryOptions) -> QueryResult<Vec<FormattedLine>> {
    let pipeline = options.pipeline();
    let mut lines = Vec::new();

    for entry in TranscriptReader::open(path)? {
        let (line, entry) = entry?;
        if !pipeline.accepts(&entry) {
            continue;
        }
        if let Some(text) = format_entry(&entry, line, path, &options.format) {
            lines.push(FormattedLine { line, text });
        }
    }

    Ok(lines)
}
