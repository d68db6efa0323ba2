use chrono::{NaiveDate, NaiveDateTime};

use crate::error::LoadError;
use crate::utils::constants::DAY_CAPTION_FORMAT;

/// Reconstruct an hour-resolution timestamp from separate date components.
///
/// Only complete, valid calendar tuples produce a timestamp; anything else
/// is a load error, never a silent default.
pub fn compose_timestamp(
    row: usize,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> Result<NaiveDateTime, LoadError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .ok_or(LoadError::InvalidTimestamp {
            row,
            year,
            month,
            day,
            hour,
        })
}

/// Format a date for range captions, e.g. "01 Mar 2016".
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_CAPTION_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_timestamp_round_trips_components() {
        let ts = compose_timestamp(1, 2016, 2, 29, 23).unwrap();
        assert_eq!(
            (ts.year(), ts.month(), ts.day(), ts.hour()),
            (2016, 2, 29, 23)
        );
    }

    #[test]
    fn test_invalid_calendar_tuple_rejected() {
        assert!(compose_timestamp(1, 2017, 2, 29, 0).is_err());
        assert!(compose_timestamp(1, 2016, 13, 1, 0).is_err());
        assert!(compose_timestamp(1, 2016, 3, 1, 24).is_err());
    }

    #[test]
    fn test_format_day() {
        let date = NaiveDate::from_ymd_opt(2016, 3, 1).unwrap();
        assert_eq!(format_day(date), "01 Mar 2016");
    }
}
