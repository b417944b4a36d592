use std::path::PathBuf;

/// One-line digest of an archived session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub path: PathBuf,
    pub date: String,
    pub session_id: String,
    /// Preview of the first authored user message, if the session has one
    pub first_message: Option<String>,
}
