use std::path::Path;

use csv::StringRecord;
use tracing::info;
use validator::Validate;

use crate::error::LoadError;
use crate::models::{Measurement, PollutantKind};
use crate::utils::constants::{
    DAY_COLUMN, HOUR_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, MISSING_MARKERS, MONTH_COLUMN,
    STATION_COLUMN, YEAR_COLUMN,
};
use crate::utils::dates::compose_timestamp;

/// Resolved positions of the schema columns within a source file's header.
/// Extra columns (weather covariates, row numbers) are ignored.
struct ColumnIndex {
    year: usize,
    month: usize,
    day: usize,
    hour: usize,
    station: usize,
    pollutants: [usize; PollutantKind::COUNT],
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| LoadError::MissingColumn {
                column: name.to_string(),
            })
        };

        let mut pollutants = [0usize; PollutantKind::COUNT];
        for kind in PollutantKind::ALL {
            pollutants[kind.index()] = require(kind.column_name())?;
        }

        Ok(Self {
            year: require(YEAR_COLUMN)?,
            month: require(MONTH_COLUMN)?,
            day: require(DAY_COLUMN)?,
            hour: require(HOUR_COLUMN)?,
            station: require(STATION_COLUMN)?,
            pollutants,
            latitude: find(LATITUDE_COLUMN),
            longitude: find(LONGITUDE_COLUMN),
        })
    }
}

/// Reads the raw tabular dataset into an ordered sequence of [`Measurement`].
///
/// Loading is idempotent and performed once per session; every schema
/// violation aborts the load rather than producing a partial sequence.
pub struct MeasurementReader;

impl MeasurementReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let columns = ColumnIndex::resolve(reader.headers()?)?;
        let mut measurements = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            // Header occupies line 1
            let row = index + 2;

            measurements.push(self.parse_record(&record, &columns, row)?);
        }

        info!(records = measurements.len(), path = %path.display(), "dataset loaded");
        Ok(measurements)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        columns: &ColumnIndex,
        row: usize,
    ) -> Result<Measurement, LoadError> {
        let year = parse_int(record, columns.year, YEAR_COLUMN, row)?;
        let month = parse_int(record, columns.month, MONTH_COLUMN, row)? as u32;
        let day = parse_int(record, columns.day, DAY_COLUMN, row)? as u32;
        let hour = parse_int(record, columns.hour, HOUR_COLUMN, row)? as u32;

        let timestamp = compose_timestamp(row, year, month, day, hour)?;

        let station = field(record, columns.station).trim().to_string();

        let mut values = [None; PollutantKind::COUNT];
        for kind in PollutantKind::ALL {
            let raw = field(record, columns.pollutants[kind.index()]);
            if let Some(value) = parse_optional_float(raw, kind.column_name(), row)? {
                if value < 0.0 {
                    return Err(LoadError::NegativeConcentration {
                        row,
                        pollutant: kind.column_name().to_string(),
                        value,
                    });
                }
                values[kind.index()] = Some(value);
            }
        }

        let latitude = match columns.latitude {
            Some(idx) => parse_optional_float(field(record, idx), LATITUDE_COLUMN, row)?,
            None => None,
        };
        let longitude = match columns.longitude {
            Some(idx) => parse_optional_float(field(record, idx), LONGITUDE_COLUMN, row)?,
            None => None,
        };

        let measurement = Measurement::new(station, timestamp, values, latitude, longitude);
        measurement.validate()?;

        Ok(measurement)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

fn parse_int(
    record: &StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<i32, LoadError> {
    let raw = field(record, index).trim();
    raw.parse::<i32>().map_err(|_| LoadError::InvalidValue {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn parse_optional_float(raw: &str, column: &str, row: usize) -> Result<Option<f64>, LoadError> {
    let trimmed = raw.trim();
    if MISSING_MARKERS
        .iter()
        .any(|m| trimmed.eq_ignore_ascii_case(m))
    {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| LoadError::InvalidValue {
            row,
            column: column.to_string(),
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "No,year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,O3,TEMP,station,Latitude,Longitude";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_read_well_formed_rows() {
        let file = write_csv(&[
            "1,2016,3,1,0,8.0,12.0,3.0,20.0,300.0,70.0,-0.7,Aotizhongxin,39.98,116.40",
            "2,2016,3,1,1,9.0,14.0,NA,22.0,400.0,68.0,-1.1,Aotizhongxin,39.98,116.40",
        ]);

        let measurements = MeasurementReader::new()
            .read_measurements(file.path())
            .unwrap();

        assert_eq!(measurements.len(), 2);
        assert_eq!(measurements[0].station, "Aotizhongxin");
        assert_eq!(measurements[0].category, TimeCategory::Morning);
        assert_eq!(measurements[0].value(PollutantKind::Pm25), Some(8.0));
        assert_eq!(measurements[1].value(PollutantKind::So2), None);
        assert!(measurements[0].has_coordinates());
    }

    #[test]
    fn test_missing_pollutant_column_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,station").unwrap();
        writeln!(file, "2016,3,1,0,8.0,12.0,3.0,20.0,300.0,Dingling").unwrap();

        let result = MeasurementReader::new().read_measurements(file.path());
        assert!(matches!(
            result,
            Err(LoadError::MissingColumn { column }) if column == "O3"
        ));
    }

    #[test]
    fn test_invalid_calendar_tuple_fails() {
        let file = write_csv(&[
            "1,2017,2,29,0,8.0,12.0,3.0,20.0,300.0,70.0,-0.7,Dingling,40.29,116.22",
        ]);

        let result = MeasurementReader::new().read_measurements(file.path());
        assert!(matches!(result, Err(LoadError::InvalidTimestamp { row: 2, .. })));
    }

    #[test]
    fn test_hour_out_of_range_fails() {
        let file = write_csv(&[
            "1,2016,3,1,24,8.0,12.0,3.0,20.0,300.0,70.0,-0.7,Dingling,40.29,116.22",
        ]);

        assert!(MeasurementReader::new().read_measurements(file.path()).is_err());
    }

    #[test]
    fn test_negative_concentration_fails() {
        let file = write_csv(&[
            "1,2016,3,1,0,-8.0,12.0,3.0,20.0,300.0,70.0,-0.7,Dingling,40.29,116.22",
        ]);

        let result = MeasurementReader::new().read_measurements(file.path());
        assert!(matches!(
            result,
            Err(LoadError::NegativeConcentration { pollutant, .. }) if pollutant == "PM2.5"
        ));
    }

    #[test]
    fn test_missing_coordinates_load_as_none() {
        let file = write_csv(&[
            "1,2016,3,1,0,8.0,12.0,3.0,20.0,300.0,70.0,-0.7,Dingling,NA,NA",
        ]);

        let measurements = MeasurementReader::new()
            .read_measurements(file.path())
            .unwrap();
        assert!(!measurements[0].has_coordinates());
    }

    #[test]
    fn test_dataset_without_coordinate_columns_loads() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,O3,station").unwrap();
        writeln!(file, "2016,3,1,0,8.0,12.0,3.0,20.0,300.0,70.0,Dingling").unwrap();

        let measurements = MeasurementReader::new()
            .read_measurements(file.path())
            .unwrap();
        assert_eq!(measurements.len(), 1);
        assert!(!measurements[0].has_coordinates());
    }

    #[test]
    fn test_truncated_row_aborts_load() {
        // Row cut off after the station cell: absent coordinate cells must
        // abort the load, not quietly become missing values.
        let file = write_csv(&["1,2016,3,1,8,10,1,1,1,1,1,-0.7,A"]);

        let result = MeasurementReader::new().read_measurements(file.path());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let file = write_csv(&[
            "1,2016,3,1,0,abc,12.0,3.0,20.0,300.0,70.0,-0.7,Dingling,40.29,116.22",
        ]);

        let result = MeasurementReader::new().read_measurements(file.path());
        assert!(matches!(
            result,
            Err(LoadError::InvalidValue { column, .. }) if column == "PM2.5"
        ));
    }
}
