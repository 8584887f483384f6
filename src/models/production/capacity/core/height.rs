//! Height-correction capacity model.
//!
//! The base rate is the net weight (gross minus tare) collected per unit of
//! elapsed time. A pile-height multiplier then scales it up for tall piles
//! and down for short ones.

mod config;
mod correction;
mod input;

pub use config::{
    DEFAULT_TARE_KG, HeightModelConfig, MISSING_HEIGHT_MULTIPLIER, OutputConvention,
    REFERENCE_HEIGHT_M,
};
pub use correction::HeightCorrection;
pub use input::HeightModelInput;

use tracing::debug;
use uom::si::{
    f64::{Mass, MassRate},
    length::meter,
    mass::{kilogram, ton},
    ratio::ratio,
    time::{hour, second},
};

use crate::support::{constraint::StrictlyPositive, units::Throughput};

use super::{Breakdown, CapacityResult, InputField, InvalidInput, breakdown::label};

/// Computes throughput with the height-correction model.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the elapsed time is not strictly positive, or
/// if [`HeightModelConfig::require_positive_hours`] is set and the hour count
/// is not strictly positive. The elapsed time is checked first.
pub fn compute_height_capacity(
    input: &HeightModelInput,
    config: &HeightModelConfig,
) -> Result<CapacityResult, InvalidInput> {
    let elapsed = StrictlyPositive::new(input.elapsed_time)
        .map_err(InvalidInput::on(InputField::ElapsedTime))?
        .into_inner();

    if config.require_positive_hours {
        StrictlyPositive::new(input.hours).map_err(InvalidInput::on(InputField::Hours))?;
    }

    let net = input.gross_weight - config.tare;
    let base: MassRate = net / elapsed;
    let hours = input.hours.get::<hour>();

    let correction = HeightCorrection::new(
        input.powder_height,
        config.reference_height,
        config.missing_height_multiplier,
    );
    let multiplier = correction.multiplier().get::<ratio>();

    let mut breakdown = Breakdown::new();
    breakdown.push(label::GROSS_WEIGHT_KG, input.gross_weight.get::<kilogram>());
    breakdown.push(label::TARE_KG, config.tare.get::<kilogram>());
    breakdown.push(label::NET_WEIGHT_KG, net.get::<kilogram>());
    breakdown.push(label::ELAPSED_TIME_S, elapsed.get::<second>());
    breakdown.push(label::HOURS, hours);
    breakdown.push(label::POWDER_HEIGHT_M, input.powder_height.get::<meter>());
    breakdown.push(label::BASE_RATE_KG_PER_HOUR, base.kilograms_per_hour());

    let (per_hour, total): (MassRate, Option<Mass>) = match config.convention {
        OutputConvention::PerHourAndTotal => {
            let per_hour = base * multiplier;
            (per_hour, Some(per_hour * input.hours))
        }
        OutputConvention::FoldedHours => {
            let folded = base * hours;
            breakdown.push(label::FOLDED_BASE_KG, folded.kilograms_per_hour());
            (folded * multiplier, None)
        }
    };

    breakdown.push(label::HEIGHT_MULTIPLIER, multiplier);
    breakdown.push(label::PER_HOUR_KG, per_hour.kilograms_per_hour());
    breakdown.push(label::PER_HOUR_TON, per_hour.tons_per_hour());
    if let Some(total) = total {
        breakdown.push(label::TOTAL_TON, total.get::<ton>());
    }

    debug!(
        ?correction,
        convention = ?config.convention,
        per_hour_ton = per_hour.tons_per_hour(),
        total_ton = total.map(|t| t.get::<ton>()),
        "height capacity computed"
    );

    Ok(CapacityResult {
        per_hour,
        total,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use uom::si::f64::Length;

    use crate::support::constraint::ConstraintError;

    fn input(gross: f64, elapsed: f64, hours: f64, height: f64) -> HeightModelInput {
        HeightModelInput::from_shop_units(gross, elapsed, hours, height)
    }

    #[test]
    fn reference_height_reports_rate_and_total() {
        let result =
            compute_height_capacity(&input(100.0, 10.0, 2.0, 1.5), &HeightModelConfig::default())
                .unwrap();

        let base = result.breakdown.get(label::BASE_RATE_KG_PER_HOUR).unwrap();
        assert_relative_eq!(base, 34_560.0, max_relative = 1e-12);
        assert_relative_eq!(
            result.breakdown.get(label::HEIGHT_MULTIPLIER).unwrap(),
            1.0
        );
        assert_relative_eq!(result.per_hour_tons(), 34.56, max_relative = 1e-12);
        assert_relative_eq!(result.total_tons().unwrap(), 69.12, max_relative = 1e-12);
    }

    #[test]
    fn tall_pile_doubles_rate() {
        let result =
            compute_height_capacity(&input(104.0, 10.0, 1.0, 6.0), &HeightModelConfig::default())
                .unwrap();

        assert_relative_eq!(
            result.breakdown.get(label::BASE_RATE_KG_PER_HOUR).unwrap(),
            36_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.per_hour_tons(), 72.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_tons().unwrap(), 72.0, max_relative = 1e-12);
    }

    #[test]
    fn missing_height_halves_rate() {
        let result =
            compute_height_capacity(&input(104.0, 10.0, 1.0, 0.0), &HeightModelConfig::default())
                .unwrap();
        assert_relative_eq!(result.per_hour_tons(), 18.0, max_relative = 1e-12);
    }

    #[test]
    fn folded_hours_reports_single_figure() {
        let config = HeightModelConfig::default().with_convention(OutputConvention::FoldedHours);
        let result = compute_height_capacity(&input(100.0, 10.0, 2.0, 3.0), &config).unwrap();

        // 34 560 kg/h * 2 h * sqrt(2), in tons.
        let expected = 34.56 * 2.0 * 2.0_f64.sqrt();
        assert_relative_eq!(result.per_hour_tons(), expected, max_relative = 1e-12);
        assert!(result.total.is_none());
        assert!(result.breakdown.get(label::TOTAL_TON).is_none());
        assert_relative_eq!(
            result.breakdown.get(label::FOLDED_BASE_KG).unwrap(),
            69_120.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn conventions_are_not_interchangeable() {
        let measured = input(100.0, 10.0, 2.0, 3.0);
        let a = compute_height_capacity(&measured, &HeightModelConfig::default()).unwrap();
        let b = compute_height_capacity(
            &measured,
            &HeightModelConfig::default().with_convention(OutputConvention::FoldedHours),
        )
        .unwrap();

        assert!(a.total.is_some());
        assert!(b.total.is_none());
        assert!((a.per_hour_tons() - b.per_hour_tons()).abs() > 1.0);
    }

    #[test]
    fn zero_hours_rejected_only_when_required() {
        let measured = input(100.0, 10.0, 0.0, 1.5);

        let err = compute_height_capacity(&measured, &HeightModelConfig::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::new(InputField::Hours, ConstraintError::Zero)
        );

        let relaxed = HeightModelConfig::default().with_require_positive_hours(false);
        let result = compute_height_capacity(&measured, &relaxed).unwrap();
        assert_relative_eq!(result.per_hour_tons(), 34.56, max_relative = 1e-12);
        assert_relative_eq!(result.total_tons().unwrap(), 0.0);
    }

    #[test]
    fn tare_and_reference_are_configurable() {
        let config = HeightModelConfig {
            tare: Mass::new::<kilogram>(0.0),
            reference_height: StrictlyPositive::new(Length::new::<meter>(3.0)).unwrap(),
            ..HeightModelConfig::default()
        };
        let result = compute_height_capacity(&input(100.0, 10.0, 1.0, 3.0), &config).unwrap();
        assert_relative_eq!(result.per_hour_tons(), 36.0, max_relative = 1e-12);
    }

    #[test]
    fn breakdown_order_follows_computation() {
        let result =
            compute_height_capacity(&input(100.0, 10.0, 2.0, 1.5), &HeightModelConfig::default())
                .unwrap();
        let labels: Vec<_> = result.breakdown.iter().map(|(name, _)| name).collect();
        assert_eq!(
            labels,
            [
                label::GROSS_WEIGHT_KG,
                label::TARE_KG,
                label::NET_WEIGHT_KG,
                label::ELAPSED_TIME_S,
                label::HOURS,
                label::POWDER_HEIGHT_M,
                label::BASE_RATE_KG_PER_HOUR,
                label::HEIGHT_MULTIPLIER,
                label::PER_HOUR_KG,
                label::PER_HOUR_TON,
                label::TOTAL_TON,
            ]
        );
    }

    proptest! {
        #[test]
        fn non_positive_elapsed_time_is_always_rejected(
            gross in -1e6..1e6_f64,
            elapsed in -1e6..=0.0_f64,
            hours in -24.0..24.0_f64,
            height in -10.0..10.0_f64,
            folded in any::<bool>(),
            require_hours in any::<bool>(),
        ) {
            let convention = if folded {
                OutputConvention::FoldedHours
            } else {
                OutputConvention::PerHourAndTotal
            };
            let config = HeightModelConfig::default()
                .with_convention(convention)
                .with_require_positive_hours(require_hours);

            let err = compute_height_capacity(&input(gross, elapsed, hours, height), &config)
                .unwrap_err();
            prop_assert_eq!(err.field, InputField::ElapsedTime);
        }

        #[test]
        fn repeated_calls_are_bit_identical(
            gross in 0.0..1e5_f64,
            elapsed in 0.1..3600.0_f64,
            hours in 0.1..24.0_f64,
            height in 0.0..10.0_f64,
            folded in any::<bool>(),
        ) {
            let convention = if folded {
                OutputConvention::FoldedHours
            } else {
                OutputConvention::PerHourAndTotal
            };
            let measured = input(gross, elapsed, hours, height);
            let config = HeightModelConfig::default().with_convention(convention);
            let first = compute_height_capacity(&measured, &config).unwrap();
            let again = compute_height_capacity(&measured, &config).unwrap();

            prop_assert_eq!(first.per_hour_tons().to_bits(), again.per_hour_tons().to_bits());
            prop_assert_eq!(
                first.total_tons().map(f64::to_bits),
                again.total_tons().map(f64::to_bits)
            );
            prop_assert_eq!(first, again);
        }
    }
}
