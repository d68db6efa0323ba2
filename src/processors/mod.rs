pub mod geo_builder;
pub mod range_filter;
pub mod station_aggregator;
pub mod trend_extractor;

pub use geo_builder::GeoPointBuilder;
pub use range_filter::filter_range;
pub use station_aggregator::StationAggregator;
pub use trend_extractor::TrendExtractor;
