//! Ordered audit trail of intermediate values.

/// Labels used by the capacity models.
///
/// Units are part of the label so a rendered breakdown reads on its own.
pub mod label {
    pub const GROSS_WEIGHT_KG: &str = "gross weight (kg)";
    pub const TARE_KG: &str = "tare (kg)";
    pub const NET_WEIGHT_KG: &str = "net weight (kg)";
    pub const ELAPSED_TIME_S: &str = "elapsed time (s)";
    pub const HOURS: &str = "hours";
    pub const POWDER_HEIGHT_M: &str = "powder height (m)";
    pub const BASE_RATE_KG_PER_HOUR: &str = "base rate (kg/h)";
    pub const FOLDED_BASE_KG: &str = "base x hours (kg/h)";
    pub const HEIGHT_MULTIPLIER: &str = "height multiplier";
    pub const PER_HOUR_KG: &str = "per hour (kg/h)";
    pub const PER_HOUR_TON: &str = "per hour (ton/h)";
    pub const TOTAL_TON: &str = "total (ton)";

    pub const WET_WEIGHT_KG: &str = "wet weight (kg)";
    pub const MOISTURE_IN: &str = "moisture in";
    pub const MOISTURE_IN_PERCENT: &str = "moisture in (%)";
    pub const MOISTURE_OUT: &str = "moisture out";
    pub const MOISTURE_OUT_PERCENT: &str = "moisture out (%)";
    pub const FILL_TIME_S: &str = "fill time (s)";
    pub const DRY_MASS_KG: &str = "dry mass (kg)";
    pub const UNITS_PER_HOUR: &str = "units per hour";
    pub const CAPACITY_KG_PER_HOUR: &str = "capacity (kg/h)";
    pub const CAPACITY_TON_PER_HOUR: &str = "capacity (ton/h)";
}

/// Labeled intermediate values in the order they were computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    entries: Vec<(&'static str, f64)>,
}

impl Breakdown {
    /// Creates an empty breakdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub(super) fn push(&mut self, label: &'static str, value: f64) {
        self.entries.push((label, value));
    }

    /// Returns the first value recorded under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, value)| value)
    }

    /// Iterates over `(label, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
