use std::path::Path;

use super::{QueryOptions, filtered_lines};
use crate::error::QueryResult;
use crate::models::FormattedLine;
use crate::utils::LineRange;

/// Which part of a file's filtered sequence to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Every filtered entry whose raw position lies in the range
    Lines(LineRange),
    /// Up to `limit` filtered entries, starting at the first whose position is `>= offset`
    Offset(usize),
    /// The first `limit` filtered entries
    Head,
}

/// Read a window of one transcript
///
/// `limit` caps offset and head selections and counts filtered entries, not raw lines.
/// Range selections are not capped.
///
/// # Errors
///
/// Returns [`crate::error::QueryError::FileNotFound`] if `path` does not exist; nothing is
/// returned for a partially read file.
pub fn read_section(
    path: &Path,
    selector: Selector,
    limit: usize,
    options: &QueryOptions,
) -> QueryResult<Vec<FormattedLine>> {
    let lines = filtered_lines(path, options)?;
    Ok(select(lines, selector, limit))
}

fn select(lines: Vec<FormattedLine>, selector: Selector, limit: usize) -> Vec<FormattedLine> {
    match selector {
        Selector::Lines(range) => lines.into_iter().filter(|l| range.contains(l.line)).collect(),
        Selector::Offset(offset) => match lines.iter().position(|l| l.line >= offset) {
            Some(start) => lines.into_iter().skip(start).take(limit).collect(),
            None => Vec::new(),
        },
        Selector::Head => lines.into_iter().take(limit).collect(),
    }
}
