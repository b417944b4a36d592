use crate::error::{QueryError, QueryResult};

/// Inclusive range of raw line positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// Parse `START-END` (e.g. `40-60`)
pub fn parse_line_range(input: &str) -> QueryResult<LineRange> {
    let invalid = || QueryError::InvalidRange(input.to_string());

    let (start, end) = input.split_once('-').ok_or_else(invalid)?;
    let start = parse_position(start).ok_or_else(invalid)?;
    let end = parse_position(end).ok_or_else(invalid)?;
    if start > end {
        return Err(invalid());
    }

    Ok(LineRange { start, end })
}

fn parse_position(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_range() {
        assert_eq!(parse_line_range("40-60").unwrap(), LineRange { start: 40, end: 60 });
        assert_eq!(parse_line_range("2-2").unwrap(), LineRange { start: 2, end: 2 });
        assert_eq!(parse_line_range("0-5").unwrap(), LineRange { start: 0, end: 5 });
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "40", "40-", "-60", "a-b", "40-60-80", "40 - 60", "+4-6", "-4-6"] {
            assert!(
                matches!(parse_line_range(input), Err(QueryError::InvalidRange(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_reversed_range() {
        assert!(matches!(parse_line_range("60-40"), Err(QueryError::InvalidRange(_))));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = LineRange { start: 3, end: 5 };
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }
}
