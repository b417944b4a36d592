//! Human-readable text extraction from transcript entries.
//!
//! Both extractors are total: an entry without suitable material yields `None`, which
//! callers treat as "leave this entry out", never as an error.

use crate::models::{ContentItem, EntryRole, MessageContent, TranscriptEntry};

const USER_PREFIX: &str = "[user] ";
const ASSISTANT_PREFIX: &str = "[assistant] ";
const THINKING_PREFIX: &str = "[thinking] ";

/// Extract the conversational text of a user or assistant entry
///
/// Plain-string content is used as is. For item lists the `text` items are joined with a
/// single space; thinking blocks, tool calls and tool results are dropped. The result is
/// prefixed with the speaker role.
pub fn extract_text(entry: &TranscriptEntry) -> Option<String> {
    let prefix = match entry.role() {
        EntryRole::User => USER_PREFIX,
        EntryRole::Assistant => ASSISTANT_PREFIX,
        EntryRole::Other => return None,
    };

    let body = match entry.content()? {
        MessageContent::PlainText(text) => text.clone(),
        MessageContent::Items(items) => {
            let texts: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    ContentItem::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            if texts.is_empty() {
                return None;
            }
            texts.join(" ")
        }
    };

    Some(format!("{prefix}{body}"))
}

/// Extract the first reasoning block of an assistant entry
pub fn extract_thinking(entry: &TranscriptEntry) -> Option<String> {
    if entry.role() != EntryRole::Assistant {
        return None;
    }

    let MessageContent::Items(items) = entry.content()? else {
        return None;
    };

    items.iter().find_map(|item| match item {
        ContentItem::Thinking(thinking) => Some(format!("{THINKING_PREFIX}{thinking}")),
        _ => None,
    })
}
