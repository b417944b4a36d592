//! Data models for archived session transcripts.
//!
//! - [`TranscriptEntry`] - One decoded transcript line, with a typed view and the raw JSON
//! - [`MessageContent`] / [`ContentItem`] - Polymorphic message content
//! - [`FormattedLine`] / [`SearchMatch`] / [`SearchResults`] - Query results
//! - [`SessionSummary`] - Per-file digest produced by the session lister
//!
//! Record fields with loose JSON shapes (`type`, `isMeta`, `message.content`) are decoded
//! through the lenient deserializers in [`crate::parsers::deserializers`].

pub mod search;
pub mod session;
pub mod transcript;

pub use search::{FormattedLine, SearchMatch, SearchResults};
pub use session::SessionSummary;
pub use transcript::{
    ContentItem, EntryFields, EntryRole, Message, MessageContent, TranscriptEntry,
};
