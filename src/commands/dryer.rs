use anyhow::Result;
use clap::Args;

use kapasitas_models::models::production::capacity::{
    DryerModelInput, InputField, compute_dryer_capacity,
};

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct DryerArgs {
    /// Wet weight of one batch (kg)
    #[arg(long, short = 'w')]
    pub wet_weight: f64,

    /// Inlet moisture content as a fraction (0.55 for 55 %)
    #[arg(long, alias = "mc-in")]
    pub moisture_in: f64,

    /// Outlet moisture content as a fraction
    #[arg(long, alias = "mc-out")]
    pub moisture_out: f64,

    /// Time to fill one batch (s)
    #[arg(long, short = 't')]
    pub fill_time: f64,

    /// Reject moisture fractions outside [0, 1]
    #[arg(long)]
    pub strict: bool,

    /// Print the intermediate values
    #[arg(long)]
    pub breakdown: bool,
}

pub fn execute(args: DryerArgs, settings: &Settings) -> Result<()> {
    let mut config = settings.dryer.model_config();
    config.validate_moisture_range |= args.strict;

    let outcome = super::check_non_negative(&[
        (InputField::WetWeight, args.wet_weight),
        (InputField::MoistureIn, args.moisture_in),
        (InputField::MoistureOut, args.moisture_out),
        (InputField::FillTime, args.fill_time),
    ])
    .and_then(|()| {
        let input = DryerModelInput::from_shop_units(
            args.wet_weight,
            args.moisture_in,
            args.moisture_out,
            args.fill_time,
        );
        compute_dryer_capacity(&input, &config)
    });

    super::report_outcome(outcome, 1.0, args.breakdown, settings.ui.locale)
}
