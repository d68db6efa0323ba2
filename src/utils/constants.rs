/// Date component columns required in every source file
pub const YEAR_COLUMN: &str = "year";
pub const MONTH_COLUMN: &str = "month";
pub const DAY_COLUMN: &str = "day";
pub const HOUR_COLUMN: &str = "hour";

/// Station identifier column
pub const STATION_COLUMN: &str = "station";

/// Coordinate columns (optional; rows without them carry no geodata)
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";

/// Cell markers treated as "no data"
pub const MISSING_MARKERS: [&str; 3] = ["", "NA", "NaN"];

/// Caption date format used by the presentation shell ("01 Mar 2016")
pub const DAY_CAPTION_FORMAT: &str = "%d %b %Y";
