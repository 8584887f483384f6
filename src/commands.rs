//! Subcommand implementations.

pub mod dryer;
pub mod height;
pub mod interactive;
pub mod report;

use anyhow::{Result, bail};

use kapasitas_models::{
    models::production::capacity::{CapacityResult, InputField, InvalidInput},
    support::{constraint::NonNegative, locale::Locale},
};

use crate::render;

/// Rejects negative measurements before they reach a model.
pub(crate) fn check_non_negative(values: &[(InputField, f64)]) -> Result<(), InvalidInput> {
    for &(field, value) in values {
        NonNegative::new(value).map_err(InvalidInput::on(field))?;
    }
    Ok(())
}

/// Prints a computed result, or turns a rejection into a localized error.
pub(crate) fn report_outcome(
    outcome: Result<CapacityResult, InvalidInput>,
    hours: f64,
    breakdown: bool,
    locale: Locale,
) -> Result<()> {
    let result = match outcome {
        Ok(result) => result,
        Err(err) => bail!(render::invalid_input(&err, locale)),
    };

    for line in render::result_lines(&result, hours, locale) {
        println!("{line}");
    }
    if breakdown {
        println!();
        for line in render::breakdown_lines(&result.breakdown) {
            println!("{line}");
        }
    }
    Ok(())
}
