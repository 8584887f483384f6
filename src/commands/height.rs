use anyhow::Result;
use clap::{Args, ValueEnum};

use kapasitas_models::models::production::capacity::{
    HeightModelInput, InputField, OutputConvention, compute_height_capacity,
};

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct HeightArgs {
    /// Gross weight of the sample including its container (kg)
    #[arg(long, short = 'w')]
    pub gross_weight: f64,

    /// Time taken to collect the sample (s)
    #[arg(long, short = 't')]
    pub elapsed: f64,

    /// Number of hours to project over
    #[arg(long, default_value_t = 1.0)]
    pub hours: f64,

    /// Height of the powder pile (m)
    #[arg(long, short = 'p')]
    pub powder_height: f64,

    /// Output convention, overriding the settings file
    #[arg(long, value_enum)]
    pub convention: Option<Convention>,

    /// Print the intermediate values
    #[arg(long)]
    pub breakdown: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Convention {
    /// Hourly rate plus a total over the requested hours
    PerHour,
    /// Hours folded into the base rate, no total
    Folded,
}

impl From<Convention> for OutputConvention {
    fn from(value: Convention) -> Self {
        match value {
            Convention::PerHour => Self::PerHourAndTotal,
            Convention::Folded => Self::FoldedHours,
        }
    }
}

pub fn execute(args: HeightArgs, settings: &Settings) -> Result<()> {
    let locale = settings.ui.locale;
    let mut config = settings.height.model_config()?;
    if let Some(convention) = args.convention {
        config = config.with_convention(convention.into());
    }

    let outcome = super::check_non_negative(&[
        (InputField::GrossWeight, args.gross_weight),
        (InputField::ElapsedTime, args.elapsed),
        (InputField::Hours, args.hours),
        (InputField::PowderHeight, args.powder_height),
    ])
    .and_then(|()| {
        let input = HeightModelInput::from_shop_units(
            args.gross_weight,
            args.elapsed,
            args.hours,
            args.powder_height,
        );
        compute_height_capacity(&input, &config)
    });

    super::report_outcome(outcome, args.hours, args.breakdown, locale)
}
