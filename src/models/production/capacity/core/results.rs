//! Result type shared by the capacity models.

use uom::si::{
    f64::{Mass, MassRate},
    mass::ton,
};

use crate::support::units::Throughput;

use super::Breakdown;

/// Throughput derived from one set of measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityResult {
    /// Hourly throughput ("ton/jam").
    ///
    /// Under [`OutputConvention::FoldedHours`](super::OutputConvention::FoldedHours)
    /// the hour count is already folded in.
    pub per_hour: MassRate,

    /// Output over the requested hours, when the model reports one.
    pub total: Option<Mass>,

    /// Intermediate values for display or audit.
    pub breakdown: Breakdown,
}

impl CapacityResult {
    /// Hourly throughput in tons per hour.
    #[must_use]
    pub fn per_hour_tons(&self) -> f64 {
        self.per_hour.tons_per_hour()
    }

    /// Total output in tons, if reported.
    #[must_use]
    pub fn total_tons(&self) -> Option<f64> {
        self.total.map(|total| total.get::<ton>())
    }
}
