use uom::si::{
    f64::{Mass, Ratio, Time},
    mass::kilogram,
    ratio::ratio,
    time::second,
};

/// Measurements for the moisture/drying model.
///
/// Moisture contents are mass fractions of water. Inlet moisture is expected
/// to exceed outlet moisture, but that is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DryerModelInput {
    /// Wet feed per batch unit.
    pub wet_weight: Mass,

    /// Moisture content before drying.
    pub moisture_in: Ratio,

    /// Moisture content after drying.
    pub moisture_out: Ratio,

    /// Time to fill one batch unit.
    pub fill_time: Time,
}

impl DryerModelInput {
    /// Builds an input from kilograms, moisture fractions and seconds.
    #[must_use]
    pub fn from_shop_units(
        wet_weight_kg: f64,
        moisture_in: f64,
        moisture_out: f64,
        fill_time_s: f64,
    ) -> Self {
        Self {
            wet_weight: Mass::new::<kilogram>(wet_weight_kg),
            moisture_in: Ratio::new::<ratio>(moisture_in),
            moisture_out: Ratio::new::<ratio>(moisture_out),
            fill_time: Time::new::<second>(fill_time_s),
        }
    }
}
