use uom::si::{
    f64::{Mass, MassRate, Time},
    mass::{kilogram, ton},
    time::hour,
};

/// Returns a duration of exactly one hour.
#[must_use]
pub fn one_hour() -> Time {
    Time::new::<hour>(1.0)
}

/// Extension trait reading and building [`MassRate`] in hourly units.
///
/// The value is stored in kilograms per second like any other [`uom`]
/// mass rate. These methods convert through the mass moved in one hour.
pub trait Throughput: Sized {
    /// Builds a mass rate from kilograms per hour.
    fn from_kilograms_per_hour(value: f64) -> Self;

    /// Returns the mass moved in one hour, in kilograms.
    fn kilograms_per_hour(self) -> f64;

    /// Returns the mass moved in one hour, in metric tons ("ton/jam").
    fn tons_per_hour(self) -> f64;
}

impl Throughput for MassRate {
    fn from_kilograms_per_hour(value: f64) -> Self {
        Mass::new::<kilogram>(value) / one_hour()
    }

    fn kilograms_per_hour(self) -> f64 {
        (self * one_hour()).get::<kilogram>()
    }

    fn tons_per_hour(self) -> f64 {
        (self * one_hour()).get::<ton>()
    }
}
