use uom::si::{
    f64::{Length, Mass, Time},
    length::meter,
    mass::kilogram,
    time::{hour, second},
};

/// Measurements for the height-correction model.
///
/// Values are taken as measured. Only the elapsed time (and the hour count,
/// when configured) is checked before computing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightModelInput {
    /// Weight on the scale, tare included.
    pub gross_weight: Mass,

    /// Time taken to collect the weighed material.
    pub elapsed_time: Time,

    /// Production period the total is computed for.
    pub hours: Time,

    /// Height of the powder pile feeding the line.
    pub powder_height: Length,
}

impl HeightModelInput {
    /// Builds an input from the units used on the shop floor:
    /// kilograms, seconds, hours and meters.
    #[must_use]
    pub fn from_shop_units(
        gross_weight_kg: f64,
        elapsed_time_s: f64,
        hours: f64,
        powder_height_m: f64,
    ) -> Self {
        Self {
            gross_weight: Mass::new::<kilogram>(gross_weight_kg),
            elapsed_time: Time::new::<second>(elapsed_time_s),
            hours: Time::new::<hour>(hours),
            powder_height: Length::new::<meter>(powder_height_m),
        }
    }
}
