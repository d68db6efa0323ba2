use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The closed set of pollutants tracked by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollutantKind {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "O3")]
    O3,
}

impl PollutantKind {
    pub const ALL: [PollutantKind; 6] = [
        PollutantKind::Pm25,
        PollutantKind::Pm10,
        PollutantKind::So2,
        PollutantKind::No2,
        PollutantKind::Co,
        PollutantKind::O3,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Column header used for this pollutant in the source dataset.
    pub fn column_name(&self) -> &'static str {
        match self {
            PollutantKind::Pm25 => "PM2.5",
            PollutantKind::Pm10 => "PM10",
            PollutantKind::So2 => "SO2",
            PollutantKind::No2 => "NO2",
            PollutantKind::Co => "CO",
            PollutantKind::O3 => "O3",
        }
    }

    /// Position of this pollutant in a per-measurement value array.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PollutantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for PollutantKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.column_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ValidationError::UnknownPollutant(s.to_string()))
    }
}
