pub mod constants;
pub mod dates;
pub mod progress;
pub mod style;

pub use constants::*;
pub use dates::{compose_timestamp, format_day};
pub use progress::ProgressReporter;
pub use style::{style_for_station, SeriesStyle};
