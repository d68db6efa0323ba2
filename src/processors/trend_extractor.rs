use crate::models::{CategoryExtreme, ExtremeKind, Measurement, PollutantKind, TimeCategory};

/// Running extremes for one time category. Candidates arrive pre-sorted
/// chronologically, then station-lexicographically, so keeping the incumbent
/// on equal values realises the documented tie-break.
struct CategorySlot<'a> {
    max: Option<(f64, &'a Measurement)>,
    min: Option<(f64, &'a Measurement)>,
}

impl<'a> CategorySlot<'a> {
    fn new() -> Self {
        Self {
            max: None,
            min: None,
        }
    }

    fn offer(&mut self, value: f64, measurement: &'a Measurement) {
        match self.max {
            Some((best, _)) if value <= best => {}
            _ => self.max = Some((value, measurement)),
        }
        match self.min {
            Some((best, _)) if value >= best => {}
            _ => self.min = Some((value, measurement)),
        }
    }
}

/// Finds the per-time-category maximum and minimum concentration of one
/// pollutant, resolving which station and hour produced each.
pub struct TrendExtractor;

impl TrendExtractor {
    pub fn new() -> Self {
        Self
    }

    /// One max and one min record per category present in the window.
    /// Categories with no rows are omitted; a window with no non-missing
    /// values yields an empty result, never a spurious zero.
    pub fn extract(
        &self,
        measurements: &[&Measurement],
        pollutant: PollutantKind,
    ) -> Vec<CategoryExtreme> {
        // Tie-break order: chronological, then station-lexicographic
        let mut candidates: Vec<&Measurement> = measurements
            .iter()
            .copied()
            .filter(|m| m.value(pollutant).is_some())
            .collect();
        candidates.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.station.cmp(&b.station))
        });

        let mut slots: [CategorySlot; 4] = [
            CategorySlot::new(),
            CategorySlot::new(),
            CategorySlot::new(),
            CategorySlot::new(),
        ];

        for measurement in candidates {
            if let Some(value) = measurement.value(pollutant) {
                slots[measurement.category as usize].offer(value, measurement);
            }
        }

        let mut extremes = Vec::new();
        for category in TimeCategory::ALL {
            let slot = &slots[category as usize];
            if let Some((value, owner)) = slot.max {
                extremes.push(self.extreme(category, pollutant, ExtremeKind::Max, value, owner));
            }
            if let Some((value, owner)) = slot.min {
                extremes.push(self.extreme(category, pollutant, ExtremeKind::Min, value, owner));
            }
        }

        extremes
    }

    fn extreme(
        &self,
        category: TimeCategory,
        pollutant: PollutantKind,
        kind: ExtremeKind,
        value: f64,
        owner: &Measurement,
    ) -> CategoryExtreme {
        CategoryExtreme {
            category,
            pollutant,
            kind,
            value,
            station: owner.station.clone(),
            timestamp: owner.timestamp,
        }
    }
}

impl Default for TrendExtractor {
    fn default() -> Self {
        Self::new()
    }
}
