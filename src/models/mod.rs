pub mod aggregates;
pub mod category;
pub mod measurement;
pub mod pollutant;

pub use aggregates::{
    CategoryExtreme, ExtremeKind, GeoPoint, HeatmapLayer, SeriesPoint, StationTimePoint,
    TrendSeries,
};
pub use category::TimeCategory;
pub use measurement::Measurement;
pub use pollutant::PollutantKind;
