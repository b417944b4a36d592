use std::path::PathBuf;

/// A filtered entry rendered for display, addressed by its raw line position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    /// 1-based position in the raw file, counted before any filtering
    pub line: usize,
    /// `<file>:<line>: <body>`
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub file: PathBuf,
    pub line: usize,
    pub text: String,
    /// Neighbouring filtered lines, preceding ones first, the match itself excluded
    pub context: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub matches: Vec<SearchMatch>,
    /// Number of transcript files actually opened before the scan finished or hit its limit
    pub files_scanned: usize,
}
