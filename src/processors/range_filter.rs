use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::models::Measurement;

/// Select the measurements whose timestamp falls within the inclusive date
/// range, optionally restricted to one station.
///
/// The end date covers its full final day: the predicate is
/// `timestamp ∈ [start, end + 1 day)`. Input order is preserved and the
/// source sequence is never mutated; an inverted range is reported to the
/// caller instead of yielding a (possibly empty) result.
pub fn filter_range<'a>(
    measurements: &'a [Measurement],
    start: NaiveDate,
    end: NaiveDate,
    station: Option<&str>,
) -> Result<Vec<&'a Measurement>, ValidationError> {
    if start > end {
        return Err(ValidationError::InvalidDateRange { start, end });
    }

    let lower = start.and_time(NaiveTime::MIN);
    // None only at the calendar upper bound, where no timestamp can exceed it
    let upper = end.succ_opt().map(|day| day.and_time(NaiveTime::MIN));

    Ok(measurements
        .iter()
        .filter(|m| m.timestamp >= lower)
        .filter(|m| upper.map_or(true, |bound| m.timestamp < bound))
        .filter(|m| station.map_or(true, |s| m.station == s))
        .collect())
}
