//! Record parsing for line-delimited transcript files
//!
//! # Error Handling Strategy
//!
//! Transcripts are read leniently:
//!
//! - **Blank lines** are skipped without comment.
//! - **Malformed lines** (invalid UTF-8, invalid JSON, JSON that is not an object) are
//!   skipped and logged at debug level. They are never an error and never renumber the
//!   lines after them.
//! - **Odd field shapes** inside an otherwise valid record decode to neutral values via
//!   [`deserializers`], so the record still takes part in queries.
//! - **File-level failures** (missing file, unreadable file) are returned as
//!   [`crate::error::QueryError`] and abort the query.

pub mod deserializers;
pub mod record;
pub mod transcript;

pub use record::parse_record;
pub use transcript::{TranscriptReader, read_transcript_entries};
