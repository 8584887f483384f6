//! Front-end settings.
//!
//! Layered from built-in defaults, an optional TOML file and
//! `KAPASITAS__`-prefixed environment variables, e.g.
//! `KAPASITAS__UI__LOCALE=en` or `KAPASITAS__HEIGHT__CONVENTION=folded-hours`.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use uom::si::{
    f64::{Length, Mass, Ratio},
    length::meter,
    mass::kilogram,
    ratio::ratio,
};

use kapasitas_models::{
    models::production::capacity::{
        DEFAULT_TARE_KG, DryerModelConfig, HeightModelConfig, MISSING_HEIGHT_MULTIPLIER,
        OutputConvention, REFERENCE_HEIGHT_M,
    },
    support::{
        constraint::{NonNegative, StrictlyPositive},
        locale::Locale,
    },
};

pub const DEFAULT_SETTINGS_FILE: &str = "kapasitas.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub height: HeightSettings,
    pub dryer: DryerSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeightSettings {
    pub tare_kg: f64,
    pub reference_height_m: f64,
    pub missing_height_multiplier: f64,
    pub convention: OutputConvention,
    pub require_positive_hours: bool,
}

impl Default for HeightSettings {
    fn default() -> Self {
        Self {
            tare_kg: DEFAULT_TARE_KG,
            reference_height_m: REFERENCE_HEIGHT_M,
            missing_height_multiplier: MISSING_HEIGHT_MULTIPLIER,
            convention: OutputConvention::default(),
            require_positive_hours: true,
        }
    }
}

impl HeightSettings {
    /// Converts to a model configuration, checking the physical constants.
    pub fn model_config(&self) -> Result<HeightModelConfig> {
        let tare = NonNegative::new(self.tare_kg).context("height.tare_kg")?;
        let reference = StrictlyPositive::new(Length::new::<meter>(self.reference_height_m))
            .context("height.reference_height_m")?;
        let fallback = NonNegative::new(self.missing_height_multiplier)
            .context("height.missing_height_multiplier")?;

        Ok(HeightModelConfig {
            tare: Mass::new::<kilogram>(tare.into_inner()),
            reference_height: reference,
            missing_height_multiplier: Ratio::new::<ratio>(fallback.into_inner()),
            convention: self.convention,
            require_positive_hours: self.require_positive_hours,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DryerSettings {
    pub validate_moisture_range: bool,
}

impl DryerSettings {
    pub fn model_config(&self) -> DryerModelConfig {
        DryerModelConfig {
            validate_moisture_range: self.validate_moisture_range,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub locale: Locale,
    pub recompute: RecomputeTrigger,
}

/// When the interactive front end recomputes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecomputeTrigger {
    /// After every field change.
    #[default]
    OnChange,
    /// Only on an explicit submit command.
    OnSubmit,
}

impl Settings {
    /// Loads layered settings.
    ///
    /// Without `path`, a missing `kapasitas.toml` is skipped. An explicit
    /// `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            ensure!(
                path.is_file(),
                "settings file `{}` does not exist",
                path.display()
            );
        }

        Self::figment(path)
            .extract()
            .context("failed to load kapasitas settings")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
        Figment::new()
            .merge(Toml::file(file))
            .merge(Env::prefixed("KAPASITAS__").split("__"))
    }
}
