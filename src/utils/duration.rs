use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{QueryError, QueryResult};

/// A month is counted as 30 days
const DAYS_PER_MONTH: i64 = 30;

/// Parse a recency window like `7d`, `2w` or `1m`
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use transcript_search::utils::parse_duration;
///
/// assert_eq!(parse_duration("2w").unwrap(), TimeDelta::days(14));
/// assert!(parse_duration("7 days").is_err());
/// ```
pub fn parse_duration(input: &str) -> QueryResult<TimeDelta> {
    let invalid = || QueryError::InvalidDuration(input.to_string());

    let unit = input.chars().last().ok_or_else(invalid)?;
    let digits = &input[..input.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let count: i64 = digits.parse().map_err(|_| invalid())?;

    let delta = match unit {
        'd' => TimeDelta::try_days(count),
        'w' => TimeDelta::try_weeks(count),
        'm' => count.checked_mul(DAYS_PER_MONTH).and_then(TimeDelta::try_days),
        _ => None,
    };
    delta.ok_or_else(invalid)
}

/// The instant `window` before `now`; `None` if it falls outside the representable range
pub fn cutoff_from(now: NaiveDateTime, window: TimeDelta) -> Option<NaiveDateTime> {
    now.checked_sub_signed(window)
}
