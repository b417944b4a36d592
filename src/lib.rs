//! Transcript Search - Query archived session transcripts
//!
//! An archive is a directory of line-delimited JSON transcripts named
//! `<YYYY-MM-DD>-<session-id>.jsonl`, one file per session. This library is a read-only
//! query layer over such an archive. It supports:
//!
//! - Decoding transcript lines leniently, skipping malformed ones without renumbering
//! - Filtering entries by role, meta-ness and conversational type
//! - Extracting role-prefixed conversation text and assistant reasoning
//! - Reading a file by line range or offset window
//! - Case-insensitive regex search across sessions, newest first, with context
//! - Listing sessions with a preview of their first user message
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use transcript_search::{FilterOptions, QueryOptions, SearchQuery, search_transcripts};
//!
//! let options = QueryOptions::new(FilterOptions { text_only: true, ..Default::default() }, false);
//! let query = SearchQuery::new("recursion")?.with_limit(5);
//! let results = search_transcripts(Path::new(".tutor/transcripts"), &query, &options)?;
//! for found in &results.matches {
//!     println!("{}", found.text);
//! }
//! # Ok::<(), transcript_search::error::QueryError>(())
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod filters;
pub mod format;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod query;
pub mod utils;

// Re-export commonly used types
pub use error::{QueryError, QueryResult};
pub use filters::{FilterOptions, FilterPipeline, RoleFilter};
pub use models::{FormattedLine, SearchMatch, SearchResults, SessionSummary, TranscriptEntry};
pub use parsers::{parse_record, read_transcript_entries};
pub use query::{
    QueryOptions, SearchQuery, Selector, list_sessions, read_section, search_transcripts,
};
