use serde::Deserialize;
use serde_json::Value;

/// Speaker role of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryRole {
    User,
    Assistant,
    /// Summaries, snapshots, system records and anything else without a conversational role
    #[default]
    Other,
}

impl EntryRole {
    pub fn from_type(value: &str) -> Self {
        match value {
            "user" => EntryRole::User,
            "assistant" => EntryRole::Assistant,
            _ => EntryRole::Other,
        }
    }

    pub fn is_conversational(self) -> bool {
        matches!(self, EntryRole::User | EntryRole::Assistant)
    }
}

/// One item of a sequence-shaped message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Text(String),
    Thinking(String),
    /// Tool calls, tool results, images and other non-text items
    Other,
}

/// Message content is either a bare string or an ordered list of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    PlainText(String),
    Items(Vec<ContentItem>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_content")]
    pub content: Option<MessageContent>,
}

/// Typed view over the fields the query engine reads from a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryFields {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "crate::parsers::deserializers::deserialize_role"
    )]
    pub role: EntryRole,
    #[serde(
        default,
        rename = "isMeta",
        deserialize_with = "crate::parsers::deserializers::deserialize_truthy"
    )]
    pub is_meta: bool,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_message")]
    pub message: Message,
}

/// A decoded transcript line
///
/// Keeps the original JSON object so structured output reproduces every field,
/// including the ones the query engine never looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub fields: EntryFields,
    pub raw: Value,
}

impl TranscriptEntry {
    pub fn role(&self) -> EntryRole {
        self.fields.role
    }

    pub fn is_meta(&self) -> bool {
        self.fields.is_meta
    }

    pub fn content(&self) -> Option<&MessageContent> {
        self.fields.message.content.as_ref()
    }
}
