//! Lenient field deserializers for transcript records.
//!
//! Transcript records come from an external producer whose format drifts between versions.
//! None of these deserializers fail: a field with an unexpected shape decodes to its
//! neutral value, so one odd field never costs the whole line.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{ContentItem, EntryRole, Message, MessageContent};

const ITEM_TYPE_TEXT: &str = "text";
const ITEM_TYPE_THINKING: &str = "thinking";

/// Map the record `type` to a role; non-string values are [`EntryRole::Other`]
pub fn deserialize_role<'de, D>(deserializer: D) -> Result<EntryRole, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(EntryRole::from_type).unwrap_or_default())
}

/// Interpret any JSON value by truthiness (`null`, `false`, `0`, `""`, `[]`, `{}` are false)
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Decode `message`, treating anything other than an object as a message without content
pub fn deserialize_message<'de, D>(deserializer: D) -> Result<Message, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
        _ => Ok(Message::default()),
    }
}

/// Decode `message.content` as either a plain string or a list of content items
pub fn deserialize_content<'de, D>(deserializer: D) -> Result<Option<MessageContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(MessageContent::PlainText(text)),
        Value::Array(items) => Some(MessageContent::Items(items.iter().map(content_item).collect())),
        _ => None,
    })
}

fn content_item(value: &Value) -> ContentItem {
    let field = |name: &str| value.get(name).and_then(Value::as_str).unwrap_or_default().to_string();

    match value.get("type").and_then(Value::as_str) {
        Some(ITEM_TYPE_TEXT) => ContentItem::Text(field("text")),
        Some(ITEM_TYPE_THINKING) => ContentItem::Thinking(field("thinking")),
        _ => ContentItem::Other,
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
