//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeDelta};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temporary transcript archive directory
pub struct ArchiveBuilder {
    temp_dir: TempDir,
}

impl ArchiveBuilder {
    /// Create a new builder with an empty archive directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the archive directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a transcript file with raw content
    pub fn with_raw(self, filename: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(filename), content)
            .expect("Failed to write transcript");
        self
    }

    /// Add a transcript file built from entries, one per line
    pub fn with_transcript(self, filename: &str, entries: &[EntryBuilder]) -> Self {
        let content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.with_raw(filename, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for transcript entries
pub struct EntryBuilder {
    entry_type: String,
    content: Value,
    is_meta: bool,
}

impl EntryBuilder {
    /// A user entry with plain string content
    pub fn user(text: &str) -> Self {
        Self { entry_type: "user".to_string(), content: json!(text), is_meta: false }
    }

    /// An assistant entry with a single text block
    pub fn assistant(text: &str) -> Self {
        Self {
            entry_type: "assistant".to_string(),
            content: json!([Self::text_block(text)]),
            is_meta: false,
        }
    }

    /// An entry of any other type, without message content
    pub fn other(entry_type: &str) -> Self {
        Self { entry_type: entry_type.to_string(), content: Value::Null, is_meta: false }
    }

    /// Replace the content with a list of blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    /// Mark the entry as injected/administrative
    pub fn meta(mut self) -> Self {
        self.is_meta = true;
        self
    }

    pub fn text_block(text: &str) -> Value {
        json!({"type": "text", "text": text})
    }

    pub fn thinking_block(text: &str) -> Value {
        json!({"type": "thinking", "thinking": text, "signature": "sig"})
    }

    pub fn tool_use_block(id: &str, name: &str) -> Value {
        json!({"type": "tool_use", "id": id, "name": name, "input": {}})
    }

    pub fn tool_result_block(tool_use_id: &str, content: &str) -> Value {
        json!({"type": "tool_result", "tool_use_id": tool_use_id, "content": content})
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        let mut entry = json!({
            "type": self.entry_type,
            "uuid": "550e8400-e29b-41d4-a716-446655440001",
            "timestamp": "2026-01-30T10:00:00Z",
        });
        if !self.content.is_null() {
            entry["message"] = json!({"role": self.entry_type, "content": self.content});
        }
        if self.is_meta {
            entry["isMeta"] = json!(true);
        }
        entry.to_string()
    }
}

/// File name for a session archived `days_ago` days before today
pub fn dated_name(days_ago: i64, session_id: &str) -> String {
    let date = Local::now().date_naive() - TimeDelta::days(days_ago);
    format!("{}-{session_id}.jsonl", date.format("%Y-%m-%d"))
}

/// The four-line file used throughout: user, assistant, blank, malformed
pub const SCENARIO: &str = concat!(
    r#"{"type":"user","message":{"content":"hi"}}"#,
    "\n",
    r#"{"type":"assistant","message":{"content":[{"type":"text","text":"hello"}]}}"#,
    "\n",
    "\n",
    "{\"type\":\"user\",\"message\"\n",
);

/// Write [`SCENARIO`] into a fresh archive and return it with the file path
pub fn scenario_archive() -> (TempDir, PathBuf) {
    let archive = ArchiveBuilder::new().with_raw("2026-01-30-scenario.jsonl", SCENARIO).build();
    let path = archive.path().join("2026-01-30-scenario.jsonl");
    (archive, path)
}
