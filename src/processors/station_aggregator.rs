use std::collections::BTreeMap;

use crate::models::{
    Measurement, PollutantKind, SeriesPoint, StationTimePoint, TrendSeries,
};

/// Per-pollutant running mean for one (timestamp, station) group.
#[derive(Default)]
struct MeanAccumulator {
    sums: [f64; PollutantKind::COUNT],
    counts: [u32; PollutantKind::COUNT],
}

impl MeanAccumulator {
    fn add(&mut self, measurement: &Measurement) {
        for kind in PollutantKind::ALL {
            if let Some(value) = measurement.value(kind) {
                self.sums[kind.index()] += value;
                self.counts[kind.index()] += 1;
            }
        }
    }

    fn means(&self) -> [Option<f64>; PollutantKind::COUNT] {
        let mut means = [None; PollutantKind::COUNT];
        for kind in PollutantKind::ALL {
            let i = kind.index();
            // All members missing => the aggregate stays "no data", never 0
            if self.counts[i] > 0 {
                means[i] = Some(self.sums[i] / self.counts[i] as f64);
            }
        }
        means
    }
}

/// Groups measurements by (timestamp, station) and computes mean pollutant
/// values per group.
///
/// Grouping runs over ordered keys, so repeated aggregation of the same
/// input is bit-identical: output is sorted chronologically, then by station.
pub struct StationAggregator;

impl StationAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn aggregate(&self, measurements: &[&Measurement]) -> Vec<StationTimePoint> {
        let mut groups: BTreeMap<(chrono::NaiveDateTime, &str), MeanAccumulator> = BTreeMap::new();

        for measurement in measurements {
            groups
                .entry((measurement.timestamp, measurement.station.as_str()))
                .or_default()
                .add(measurement);
        }

        groups
            .into_iter()
            .map(|((timestamp, station), acc)| StationTimePoint {
                timestamp,
                station: station.to_string(),
                means: acc.means(),
            })
            .collect()
    }

    /// Split aggregated points into one line series per station, in the
    /// caller's (stable) station order. Stations with no points in the
    /// window are omitted.
    pub fn line_series(
        &self,
        points: &[StationTimePoint],
        pollutant: PollutantKind,
        station_order: &[String],
    ) -> Vec<TrendSeries> {
        station_order
            .iter()
            .filter_map(|station| {
                let series_points: Vec<SeriesPoint> = points
                    .iter()
                    .filter(|p| &p.station == station)
                    .map(|p| SeriesPoint {
                        timestamp: p.timestamp,
                        value: p.mean(pollutant),
                    })
                    .collect();

                if series_points.is_empty() {
                    None
                } else {
                    Some(TrendSeries {
                        station: station.clone(),
                        pollutant,
                        points: series_points,
                    })
                }
            })
            .collect()
    }

    /// Distinct station identifiers in first-appearance order. Drives the
    /// station selector and keeps per-station styling stable across runs.
    pub fn distinct_stations(measurements: &[Measurement]) -> Vec<String> {
        let mut stations: Vec<String> = Vec::new();
        for measurement in measurements {
            if !stations.iter().any(|s| *s == measurement.station) {
                stations.push(measurement.station.clone());
            }
        }
        stations
    }
}

impl Default for StationAggregator {
    fn default() -> Self {
        Self::new()
    }
}
