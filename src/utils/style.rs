use serde::{Deserialize, Serialize};

/// Line styles cycled across stations, in assignment order.
pub const LINE_STYLES: [&str; 4] = ["solid", "dashed", "dashdot", "dotted"];

/// Color palette cycled across stations, in assignment order.
pub const COLORS: [&str; 12] = [
    "blue", "green", "red", "cyan", "magenta", "yellow", "black", "orange", "purple", "brown",
    "pink", "gray",
];

/// Chart style for one station's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: &'static str,
    pub line_style: &'static str,
}

/// Deterministic style assignment: fixed index-based cycling over the
/// palettes, keyed by the station's position in the dataset's stable station
/// order. The same input always renders the same way.
pub fn style_for_station(station_index: usize) -> SeriesStyle {
    SeriesStyle {
        color: COLORS[station_index % COLORS.len()],
        line_style: LINE_STYLES[station_index % LINE_STYLES.len()],
    }
}
