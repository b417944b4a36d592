//! Display formatting for accepted transcript entries.

use std::path::Path;

use crate::extract::{extract_text, extract_thinking};
use crate::models::TranscriptEntry;

/// How an accepted entry is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The whole record re-serialized as compact JSON
    #[default]
    Structured,
    /// Role-prefixed conversation text
    Extracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub mode: OutputMode,
    /// Append assistant reasoning in extracted mode
    pub include_thinking: bool,
}

/// Render an entry as `<file>:<line>: <body>`
///
/// Returns `None` when extracted mode finds nothing to show; the entry is then left out of
/// the output entirely.
pub fn format_entry(
    entry: &TranscriptEntry,
    line: usize,
    file: &Path,
    options: &FormatOptions,
) -> Option<String> {
    let body = match options.mode {
        OutputMode::Structured => serde_json::to_string(&entry.raw).ok()?,
        OutputMode::Extracted => extracted_body(entry, options.include_thinking)?,
    };

    Some(format!("{}:{line}: {body}", file.display()))
}

fn extracted_body(entry: &TranscriptEntry, include_thinking: bool) -> Option<String> {
    let text = extract_text(entry);
    if !include_thinking {
        return text;
    }

    match (text, extract_thinking(entry)) {
        (Some(text), Some(thinking)) => Some(format!("{text}\n{thinking}")),
        (None, thinking) => thinking,
        (text, None) => text,
    }
}
