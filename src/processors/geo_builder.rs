use tracing::debug;

use crate::models::{GeoPoint, HeatmapLayer, Measurement, PollutantKind};

/// Builds heatmap input from a filtered window: one weighted point per
/// measurement with both coordinates and a concentration for the chosen
/// pollutant.
///
/// Ineligible rows are excluded rather than zero-filled, which would skew
/// the heatmap weighting. Returns `None` when no eligible point exists so
/// the shell can render "no geodata" instead of crashing the map widget.
pub struct GeoPointBuilder;

impl GeoPointBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        measurements: &[&Measurement],
        pollutant: PollutantKind,
    ) -> Option<HeatmapLayer> {
        let points: Vec<GeoPoint> = measurements
            .iter()
            .filter_map(|m| {
                let intensity = m.value(pollutant)?;
                Some(GeoPoint {
                    latitude: m.latitude?,
                    longitude: m.longitude?,
                    intensity,
                })
            })
            .collect();

        if points.is_empty() {
            debug!(%pollutant, "no eligible geo points in window");
            return None;
        }

        let count = points.len() as f64;
        let center_latitude = points.iter().map(|p| p.latitude).sum::<f64>() / count;
        let center_longitude = points.iter().map(|p| p.longitude).sum::<f64>() / count;

        Some(HeatmapLayer {
            pollutant,
            points,
            center_latitude,
            center_longitude,
        })
    }
}

impl Default for GeoPointBuilder {
    fn default() -> Self {
        Self::new()
    }
}
