//! Kapasitas command-line front end.
//!
//! Collects measurements, runs the capacity models and prints localized
//! results or shift reports.

mod commands;
mod render;
mod session;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use kapasitas_models::support::locale::Locale;

use settings::Settings;

/// Production-line capacity calculator (ton/jam)
#[derive(Parser)]
#[command(name = "kapasitas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Production-line capacity calculator (ton/jam)", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Settings file (TOML). Defaults to `kapasitas.toml` when present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output language, overriding the settings file (`id` or `en`)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Height-correction model
    Height(commands::height::HeightArgs),
    /// Moisture/drying model
    Dryer(commands::dryer::DryerArgs),
    /// Enter measurements one at a time
    Interactive(commands::interactive::InteractiveArgs),
    /// Print a shift production report
    Report(commands::report::ReportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        settings.ui.locale = locale;
    }

    match cli.command {
        Commands::Height(args) => commands::height::execute(args, &settings),
        Commands::Dryer(args) => commands::dryer::execute(args, &settings),
        Commands::Interactive(args) => commands::interactive::execute(args, &settings),
        Commands::Report(args) => commands::report::execute(args, &settings),
    }
}
