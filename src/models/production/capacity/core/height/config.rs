use uom::si::{
    f64::{Length, Mass, Ratio},
    length::meter,
    mass::kilogram,
    ratio::ratio,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Container weight subtracted from every gross reading, in kilograms.
pub const DEFAULT_TARE_KG: f64 = 4.0;

/// Pile height at which no correction is applied, in meters.
pub const REFERENCE_HEIGHT_M: f64 = 1.5;

/// Multiplier used when the pile height is zero, negative or missing.
pub const MISSING_HEIGHT_MULTIPLIER: f64 = 0.5;

/// How the hour count enters the height-correction model.
///
/// The two conventions report different figures and are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OutputConvention {
    /// Report the corrected hourly rate and, separately, the total for the
    /// requested hours.
    #[default]
    PerHourAndTotal,

    /// Multiply the base rate by the hour count before the height
    /// correction and report that single figure, with no total.
    FoldedHours,
}

/// Configuration for the height-correction model.
#[derive(Debug, Clone, Copy)]
pub struct HeightModelConfig {
    /// Weight subtracted from the gross reading.
    pub tare: Mass,

    /// Pile height with a multiplier of exactly one.
    pub reference_height: Constrained<Length, StrictlyPositive>,

    /// Multiplier applied when the pile height is not positive.
    pub missing_height_multiplier: Ratio,

    /// Which output convention to use.
    pub convention: OutputConvention,

    /// Refuse to compute unless the hour count is strictly positive.
    pub require_positive_hours: bool,
}

impl Default for HeightModelConfig {
    fn default() -> Self {
        Self {
            tare: Mass::new::<kilogram>(DEFAULT_TARE_KG),
            reference_height: StrictlyPositive::new(Length::new::<meter>(REFERENCE_HEIGHT_M))
                .expect("reference height constant is positive"),
            missing_height_multiplier: Ratio::new::<ratio>(MISSING_HEIGHT_MULTIPLIER),
            convention: OutputConvention::default(),
            require_positive_hours: true,
        }
    }
}

impl HeightModelConfig {
    /// Returns this configuration with a different output convention.
    #[must_use]
    pub fn with_convention(self, convention: OutputConvention) -> Self {
        Self { convention, ..self }
    }

    /// Returns this configuration with the hour gate switched on or off.
    #[must_use]
    pub fn with_require_positive_hours(self, require: bool) -> Self {
        Self {
            require_positive_hours: require,
            ..self
        }
    }
}
