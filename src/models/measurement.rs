use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{PollutantKind, TimeCategory};

/// One pollutant observation at a station and hour. Immutable once loaded.
///
/// Missing pollutant values stay `None` and propagate as "no data" through
/// every aggregate; they are never coerced to zero. Coordinates are optional
/// because not every dataset variant carries them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Measurement {
    #[validate(length(min = 1))]
    pub station: String,

    /// Hour-resolution timestamp reconstructed from (year, month, day, hour).
    pub timestamp: NaiveDateTime,

    /// Derived from `timestamp.hour()` at load time, cached here.
    pub category: TimeCategory,

    /// Concentrations indexed by `PollutantKind::index()`.
    pub pollutants: [Option<f64>; PollutantKind::COUNT],

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl Measurement {
    pub fn new(
        station: String,
        timestamp: NaiveDateTime,
        pollutants: [Option<f64>; PollutantKind::COUNT],
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            station,
            timestamp,
            category: TimeCategory::from_hour(timestamp.hour()),
            pollutants,
            latitude,
            longitude,
        }
    }

    pub fn value(&self, kind: PollutantKind) -> Option<f64> {
        self.pollutants[kind.index()]
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
