use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket, derived once from a measurement's hour.
///
/// Boundaries are half-open on the right, with the final bucket running to
/// end of day: `[0,6)` Morning, `[6,12)` Midday, `[12,18)` Afternoon,
/// `[18,24)` Night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeCategory {
    Morning,
    Midday,
    Afternoon,
    Night,
}

impl TimeCategory {
    pub const ALL: [TimeCategory; 4] = [
        TimeCategory::Morning,
        TimeCategory::Midday,
        TimeCategory::Afternoon,
        TimeCategory::Night,
    ];

    /// Total over 0-23. Hours are validated at load time, so the fall-through
    /// arm only ever sees 18-23.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeCategory::Morning,
            6..=11 => TimeCategory::Midday,
            12..=17 => TimeCategory::Afternoon,
            _ => TimeCategory::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeCategory::Morning => "Morning",
            TimeCategory::Midday => "Midday",
            TimeCategory::Afternoon => "Afternoon",
            TimeCategory::Night => "Night",
        }
    }
}

impl fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(TimeCategory::from_hour(0), TimeCategory::Morning);
        assert_eq!(TimeCategory::from_hour(5), TimeCategory::Morning);
        assert_eq!(TimeCategory::from_hour(6), TimeCategory::Midday);
        assert_eq!(TimeCategory::from_hour(11), TimeCategory::Midday);
        assert_eq!(TimeCategory::from_hour(12), TimeCategory::Afternoon);
        assert_eq!(TimeCategory::from_hour(17), TimeCategory::Afternoon);
        assert_eq!(TimeCategory::from_hour(18), TimeCategory::Night);
        assert_eq!(TimeCategory::from_hour(23), TimeCategory::Night);
    }

    #[test]
    fn test_partitions_the_day() {
        // Every hour maps to exactly one bucket and all four appear.
        let mut counts = [0usize; 4];
        for hour in 0..24 {
            let category = TimeCategory::from_hour(hour);
            let slot = TimeCategory::ALL.iter().position(|c| *c == category).unwrap();
            counts[slot] += 1;
        }
        assert_eq!(counts, [6, 6, 6, 6]);
    }
}
