use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use jiff::civil::{Date, Time};
use uom::si::f64::MassRate;

use kapasitas_models::support::{
    report::{LogEntry, Shift, ShiftReport},
    units::Throughput,
};

use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Production date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Date,

    /// Shift number (1, 2 or 3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub shift: u8,

    /// Operator name printed in the header
    #[arg(long)]
    pub operator: Option<String>,

    /// Reading as `HH:MM=ton_per_hour[=note]`, repeatable
    #[arg(long = "entry", short = 'e')]
    pub entries: Vec<EntryArg>,
}

/// A reading given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryArg {
    pub time: Time,
    pub tons_per_hour: f64,
    pub note: Option<String>,
}

impl FromStr for EntryArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '=');
        let time = parts.next().unwrap_or_default().trim();
        let time: Time = time
            .parse()
            .with_context(|| format!("invalid time `{time}`"))?;
        let rate = parts
            .next()
            .ok_or_else(|| anyhow!("missing throughput in `{s}`"))?
            .trim();
        let tons_per_hour: f64 = rate
            .replace(',', ".")
            .parse()
            .with_context(|| format!("invalid throughput `{rate}`"))?;
        let note = parts
            .next()
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(str::to_owned);

        Ok(Self {
            time,
            tons_per_hour,
            note,
        })
    }
}

impl EntryArg {
    fn into_entry(self) -> LogEntry {
        let rate = MassRate::from_kilograms_per_hour(self.tons_per_hour * 1000.0);
        let entry = LogEntry::new(self.time, rate);
        match self.note {
            Some(note) => entry.with_note(note),
            None => entry,
        }
    }
}

pub fn execute(args: ReportArgs, settings: &Settings) -> Result<()> {
    let shift = Shift::from_number(args.shift)
        .ok_or_else(|| anyhow!("no shift numbered {}", args.shift))?;

    let mut report = ShiftReport::new(args.date, shift);
    if let Some(operator) = args.operator {
        report = report.with_operator(operator);
    }
    for entry in args.entries {
        report.record(entry.into_entry())?;
    }

    print!("{}", report.render(settings.ui.locale));
    Ok(())
}
