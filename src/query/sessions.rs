use std::path::Path;

use super::discover_transcripts;
use crate::error::QueryResult;
use crate::extract::extract_text;
use crate::models::{EntryRole, SessionSummary};
use crate::parsers::TranscriptReader;
use crate::utils::{date_prefix, session_id};

/// Characters of the first user message kept in a session preview
pub const PREVIEW_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

/// Summarize every transcript in `dir`, newest first
pub fn list_sessions(dir: &Path) -> QueryResult<Vec<SessionSummary>> {
    discover_transcripts(dir)?.iter().map(|path| summarize_session(path)).collect()
}

/// Summarize one transcript file
///
/// The preview is the first non-meta user entry with extractable text. Role and text-only
/// filters do not apply here. Reading stops at that entry.
pub fn summarize_session(path: &Path) -> QueryResult<SessionSummary> {
    let mut first_message = None;

    for entry in TranscriptReader::open(path)? {
        let (_, entry) = entry?;
        if entry.role() != EntryRole::User || entry.is_meta() {
            continue;
        }
        if let Some(text) = extract_text(&entry) {
            first_message = Some(truncate_preview(&text));
            break;
        }
    }

    Ok(SessionSummary {
        path: path.to_path_buf(),
        date: date_prefix(path),
        session_id: session_id(path),
        first_message,
    })
}

fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}
