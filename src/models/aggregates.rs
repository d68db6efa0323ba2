use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{PollutantKind, TimeCategory};

/// Mean pollutant values for one (timestamp, station) group.
///
/// Recomputed on every filter change and discarded after a render cycle;
/// never persisted. A `None` entry means every group member was missing that
/// pollutant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTimePoint {
    pub timestamp: NaiveDateTime,
    pub station: String,
    pub means: [Option<f64>; PollutantKind::COUNT],
}

impl StationTimePoint {
    pub fn mean(&self, kind: PollutantKind) -> Option<f64> {
        self.means[kind.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremeKind {
    Max,
    Min,
}

/// The max or min concentration observed within a time category, with the
/// station and timestamp that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExtreme {
    pub category: TimeCategory,
    pub pollutant: PollutantKind,
    pub kind: ExtremeKind,
    pub value: f64,
    pub station: String,
    pub timestamp: NaiveDateTime,
}

/// One chart point. `value: None` is a gap the renderer leaves unplotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: Option<f64>,
}

/// Ordered per-station line series for one pollutant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub station: String,
    pub pollutant: PollutantKind,
    pub points: Vec<SeriesPoint>,
}

/// A (latitude, longitude, intensity) triple for heatmap weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: f64,
}

/// Heatmap input: eligible points plus the centroid used as the initial
/// viewport center. Only built when at least one eligible point exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapLayer {
    pub pollutant: PollutantKind,
    pub points: Vec<GeoPoint>,
    pub center_latitude: f64,
    pub center_longitude: f64,
}
