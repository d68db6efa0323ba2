use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ValidationError};
use crate::models::{CategoryExtreme, HeatmapLayer, Measurement, PollutantKind, TrendSeries};
use crate::processors::{filter_range, GeoPointBuilder, StationAggregator, TrendExtractor};
use crate::readers::MeasurementReader;

/// One user interaction: a date range, a pollutant, and optionally a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub station: Option<String>,
    pub pollutant: PollutantKind,
}

/// Everything the presentation shell needs for one render cycle. Each
/// consumer's result is independent: an empty extremes list or an absent
/// heatmap never blocks the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub line_series: Vec<TrendSeries>,
    pub extremes: Vec<CategoryExtreme>,
    pub heatmap: Option<HeatmapLayer>,
}

/// Headline numbers for the shell's sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub stations: Vec<String>,
    pub time_range: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Fraction of rows carrying a value, per pollutant in `PollutantKind::ALL` order.
    pub coverage: [f64; PollutantKind::COUNT],
}

/// The loaded measurement sequence, owned explicitly and shared immutably.
///
/// Loading happens once per session; every query borrows the handle and no
/// pipeline stage mutates it, so consumers may safely read the same filtered
/// view side by side.
#[derive(Debug, Clone)]
pub struct Dataset {
    measurements: Vec<Measurement>,
    stations: Vec<String>,
}

impl Dataset {
    pub fn from_measurements(measurements: Vec<Measurement>) -> Self {
        let stations = StationAggregator::distinct_stations(&measurements);
        Self {
            measurements,
            stations,
        }
    }

    /// Bulk-load the dataset from a CSV file. One read per session.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let measurements = MeasurementReader::new().read_measurements(path)?;
        Ok(Self::from_measurements(measurements))
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Distinct stations in stable first-appearance order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.measurements.iter().map(|m| m.timestamp).min()?;
        let last = self.measurements.iter().map(|m| m.timestamp).max()?;
        Some((first, last))
    }

    /// Validate the request's selectors against this dataset and return the
    /// matching rows, chronological order preserved.
    pub fn filter(&self, request: &FilterRequest) -> Result<Vec<&Measurement>> {
        if let Some(station) = &request.station {
            if !self.stations.iter().any(|s| s == station) {
                return Err(ValidationError::UnknownStation {
                    station: station.clone(),
                }
                .into());
            }
        }

        Ok(filter_range(
            &self.measurements,
            request.start_date,
            request.end_date,
            request.station.as_deref(),
        )?)
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut coverage = [0.0; PollutantKind::COUNT];
        if !self.measurements.is_empty() {
            for kind in PollutantKind::ALL {
                let present = self
                    .measurements
                    .iter()
                    .filter(|m| m.value(kind).is_some())
                    .count();
                coverage[kind.index()] = present as f64 / self.measurements.len() as f64;
            }
        }

        DatasetSummary {
            records: self.measurements.len(),
            stations: self.stations.clone(),
            time_range: self.time_range(),
            coverage,
        }
    }
}

/// One complete pipeline run: Filter, then the three consumers over the same
/// immutable filtered view. Selector errors abort the run; per-consumer empty
/// results do not.
pub fn run(dataset: &Dataset, request: &FilterRequest) -> Result<PipelineOutput> {
    let filtered = dataset.filter(request)?;
    info!(
        rows = filtered.len(),
        pollutant = %request.pollutant,
        start = %request.start_date,
        end = %request.end_date,
        "pipeline run"
    );

    let aggregator = StationAggregator::new();
    let points = aggregator.aggregate(&filtered);
    let line_series = aggregator.line_series(&points, request.pollutant, dataset.stations());

    let extremes = TrendExtractor::new().extract(&filtered, request.pollutant);
    let heatmap = GeoPointBuilder::new().build(&filtered, request.pollutant);

    Ok(PipelineOutput {
        line_series,
        extremes,
        heatmap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use chrono::NaiveDate;

    fn measurement(station: &str, day: u32, hour: u32, pm25: Option<f64>) -> Measurement {
        let mut values = [None; PollutantKind::COUNT];
        values[PollutantKind::Pm25.index()] = pm25;
        let timestamp = NaiveDate::from_ymd_opt(2016, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Measurement::new(station.to_string(), timestamp, values, Some(39.9), Some(116.4))
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 3, day).unwrap()
    }

    fn request(start: u32, end: u32, station: Option<&str>) -> FilterRequest {
        FilterRequest {
            start_date: date(start),
            end_date: date(end),
            station: station.map(str::to_string),
            pollutant: PollutantKind::Pm25,
        }
    }

    #[test]
    fn test_unknown_station_rejected() {
        let dataset = Dataset::from_measurements(vec![measurement("A", 1, 0, Some(1.0))]);
        let result = dataset.filter(&request(1, 1, Some("Nosuch")));
        assert!(matches!(
            result,
            Err(PipelineError::Validation(ValidationError::UnknownStation { .. }))
        ));
    }

    #[test]
    fn test_inverted_range_never_filters() {
        let dataset = Dataset::from_measurements(vec![measurement("A", 1, 0, Some(1.0))]);
        let result = dataset.filter(&request(2, 1, None));
        assert!(matches!(
            result,
            Err(PipelineError::Validation(ValidationError::InvalidDateRange { .. }))
        ));
    }

    #[test]
    fn test_empty_window_still_produces_output() {
        let dataset = Dataset::from_measurements(vec![measurement("A", 1, 0, Some(1.0))]);
        let output = run(&dataset, &request(20, 21, None)).unwrap();
        assert!(output.line_series.is_empty());
        assert!(output.extremes.is_empty());
        assert!(output.heatmap.is_none());
    }

    #[test]
    fn test_consumers_fail_independently() {
        // Rows without coordinates: heatmap absent, but series and extremes
        // still produced.
        let mut values = [None; PollutantKind::COUNT];
        values[PollutantKind::Pm25.index()] = Some(5.0);
        let timestamp = date(1).and_hms_opt(10, 0, 0).unwrap();
        let m = Measurement::new("A".to_string(), timestamp, values, None, None);

        let dataset = Dataset::from_measurements(vec![m]);
        let output = run(&dataset, &request(1, 1, None)).unwrap();

        assert_eq!(output.line_series.len(), 1);
        assert_eq!(output.extremes.len(), 2);
        assert!(output.heatmap.is_none());
    }

    #[test]
    fn test_summary_coverage() {
        let dataset = Dataset::from_measurements(vec![
            measurement("A", 1, 0, Some(1.0)),
            measurement("A", 1, 1, None),
        ]);

        let summary = dataset.summary();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.coverage[PollutantKind::Pm25.index()], 0.5);
        assert_eq!(summary.coverage[PollutantKind::O3.index()], 0.0);
    }
}
