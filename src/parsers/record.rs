use serde_json::Value;

use crate::models::{EntryFields, TranscriptEntry};

/// Decode one raw transcript line
///
/// Returns `None` for blank lines and for anything that is not a JSON object. Callers skip
/// such lines; they still occupy a line position.
pub fn parse_record(line: &str) -> Option<TranscriptEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let raw: Value = serde_json::from_str(line).ok()?;
    if !raw.is_object() {
        return None;
    }

    let fields = EntryFields::deserialize_lenient(&raw);
    Some(TranscriptEntry { fields, raw })
}

impl EntryFields {
    fn deserialize_lenient(raw: &Value) -> Self {
        // The field deserializers never fail, so this only falls back on exotic input
        serde_json::from_value(raw.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryRole, MessageContent};

    #[test]
    fn test_parse_user_record() {
        let entry = parse_record(r#"{"type":"user","message":{"content":"hi"}}"#).unwrap();
        assert_eq!(entry.role(), EntryRole::User);
        assert!(!entry.is_meta());
        assert_eq!(entry.content(), Some(&MessageContent::PlainText("hi".to_string())));
    }

    #[test]
    fn test_parse_keeps_unknown_fields_in_raw() {
        let entry =
            parse_record(r#"{"type":"system","subtype":"local_command","level":"info"}"#).unwrap();
        assert_eq!(entry.role(), EntryRole::Other);
        assert_eq!(entry.raw["subtype"], "local_command");
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert!(parse_record("  {\"type\":\"user\"}\r").is_some());
    }

    #[test]
    fn test_blank_and_malformed_lines_are_absent() {
        assert!(parse_record("").is_none());
        assert!(parse_record("   ").is_none());
        assert!(parse_record("not json").is_none());
        assert!(parse_record(r#"{"type":"user""#).is_none());
    }

    #[test]
    fn test_non_object_json_is_absent() {
        assert!(parse_record("[1,2,3]").is_none());
        assert!(parse_record("\"user\"").is_none());
        assert!(parse_record("42").is_none());
    }
}
