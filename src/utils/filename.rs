//! Transcript file naming: `<YYYY-MM-DD>-<session-id>.jsonl`.

use std::path::Path;

use chrono::NaiveDate;

/// Extension of archived transcripts
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

const DATE_PREFIX_LEN: usize = 10;
const DATE_FORMAT: &str = "%Y-%m-%d";

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// The first ten characters of the file stem, where the archive date lives
pub fn date_prefix(path: &Path) -> String {
    file_stem(path).chars().take(DATE_PREFIX_LEN).collect()
}

/// Date encoded in the file name, or `None` if the prefix is not a valid date
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use chrono::NaiveDate;
/// use transcript_search::utils::file_date;
///
/// let path = Path::new(".tutor/transcripts/2026-01-30-abc123.jsonl");
/// assert_eq!(file_date(path), NaiveDate::from_ymd_opt(2026, 1, 30));
/// assert_eq!(file_date(Path::new("notes.jsonl")), None);
/// ```
pub fn file_date(path: &Path) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&date_prefix(path), DATE_FORMAT).ok()
}

/// Session identifier: the stem after the date prefix and its separator
///
/// Stems no longer than the date prefix are returned whole.
pub fn session_id(path: &Path) -> String {
    let stem = file_stem(path);
    if stem.chars().count() > DATE_PREFIX_LEN {
        stem.chars().skip(DATE_PREFIX_LEN + 1).collect()
    } else {
        stem
    }
}

pub fn is_transcript_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TRANSCRIPT_EXTENSION)
}
