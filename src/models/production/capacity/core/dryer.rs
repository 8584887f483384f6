//! Moisture/drying capacity model.
//!
//! A mass balance on the solids converts a wet batch at inlet moisture into
//! its mass at outlet moisture. The fill time sets how many batches pass per
//! hour.

mod input;

pub use input::DryerModelInput;

use tracing::{debug, warn};
use uom::si::{
    f64::{Mass, MassRate, Ratio},
    mass::kilogram,
    ratio::{percent, ratio},
    time::second,
};

use crate::support::{
    constraint::{BelowOne, StrictlyPositive, UnitInterval, UnitIntervalUpperOpen},
    units::{Throughput, one_hour},
};

use super::{Breakdown, CapacityResult, InputField, InvalidInput, breakdown::label};

/// Configuration for the moisture/drying model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DryerModelConfig {
    /// Reject inlet moisture outside `[0, 1]` and outlet moisture outside `[0, 1)`.
    ///
    /// When unset, only `moisture_out < 1` is required and values such as a
    /// negative moisture pass through, possibly giving a negative dry mass.
    pub validate_moisture_range: bool,
}

/// Computes throughput with the moisture/drying model.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the fill time is not strictly positive or the
/// outlet moisture is not below one. With
/// [`DryerModelConfig::validate_moisture_range`] set, moisture contents
/// outside the unit interval are rejected as well.
pub fn compute_dryer_capacity(
    input: &DryerModelInput,
    config: &DryerModelConfig,
) -> Result<CapacityResult, InvalidInput> {
    let fill_time = StrictlyPositive::new(input.fill_time)
        .map_err(InvalidInput::on(InputField::FillTime))?
        .into_inner();

    if config.validate_moisture_range {
        UnitInterval::new(input.moisture_in).map_err(InvalidInput::on(InputField::MoistureIn))?;
        UnitIntervalUpperOpen::new(input.moisture_out)
            .map_err(InvalidInput::on(InputField::MoistureOut))?;
    } else {
        BelowOne::new(input.moisture_out).map_err(InvalidInput::on(InputField::MoistureOut))?;
    }

    if input.moisture_in <= input.moisture_out {
        warn!(
            moisture_in = input.moisture_in.get::<ratio>(),
            moisture_out = input.moisture_out.get::<ratio>(),
            "outlet moisture is not below inlet moisture"
        );
    }

    let one = Ratio::new::<ratio>(1.0);
    let dry_mass: Mass = input.wet_weight * (one - input.moisture_in) / (one - input.moisture_out);
    let units_per_hour: Ratio = one_hour() / fill_time;

    let kg_per_hour = units_per_hour.get::<ratio>() * dry_mass.get::<kilogram>();
    let per_hour = MassRate::from_kilograms_per_hour(kg_per_hour);
    let ton_per_hour = per_hour.tons_per_hour();

    let mut breakdown = Breakdown::new();
    breakdown.push(label::WET_WEIGHT_KG, input.wet_weight.get::<kilogram>());
    breakdown.push(label::MOISTURE_IN, input.moisture_in.get::<ratio>());
    breakdown.push(label::MOISTURE_IN_PERCENT, input.moisture_in.get::<percent>());
    breakdown.push(label::MOISTURE_OUT, input.moisture_out.get::<ratio>());
    breakdown.push(label::MOISTURE_OUT_PERCENT, input.moisture_out.get::<percent>());
    breakdown.push(label::FILL_TIME_S, fill_time.get::<second>());
    breakdown.push(label::DRY_MASS_KG, dry_mass.get::<kilogram>());
    breakdown.push(label::UNITS_PER_HOUR, units_per_hour.get::<ratio>());
    breakdown.push(label::CAPACITY_KG_PER_HOUR, kg_per_hour);
    breakdown.push(label::CAPACITY_TON_PER_HOUR, ton_per_hour);

    debug!(
        dry_mass_kg = dry_mass.get::<kilogram>(),
        per_hour_ton = per_hour.tons_per_hour(),
        "dryer capacity computed"
    );

    Ok(CapacityResult {
        per_hour,
        total: None,
        breakdown,
    })
}
