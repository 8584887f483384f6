//! Interactive input session.
//!
//! Holds the measurements entered so far and decides, according to the
//! configured [`RecomputeTrigger`], when to run the model.

use std::collections::BTreeMap;

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, info};

use kapasitas_models::{
    models::production::capacity::{
        CapacityResult, DryerModelConfig, DryerModelInput, HeightModelConfig, HeightModelInput,
        InputField, InvalidInput, compute_dryer_capacity, compute_height_capacity,
    },
    support::constraint::NonNegative,
};

use crate::settings::RecomputeTrigger;

/// Which capacity model the session feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    Height,
    Dryer,
}

impl ModelKind {
    /// Fields the model needs, in prompt order.
    pub fn fields(self) -> &'static [InputField] {
        match self {
            Self::Height => &[
                InputField::GrossWeight,
                InputField::ElapsedTime,
                InputField::Hours,
                InputField::PowderHeight,
            ],
            Self::Dryer => &[
                InputField::WetWeight,
                InputField::MoistureIn,
                InputField::MoistureOut,
                InputField::FillTime,
            ],
        }
    }
}

/// A parsed line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(InputField, f64),
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` does not belong to this model")]
    WrongModel(InputField),

    #[error("`{0}` is not a number")]
    BadNumber(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}

/// Result of asking the session for a computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The model ran.
    Computed(CapacityResult),

    /// An input was rejected at the boundary or by the model.
    Rejected(InvalidInput),

    /// Some fields have no value yet.
    Incomplete(Vec<InputField>),
}

/// Resolves a field name, accepting the Indonesian shop-floor names as aliases.
fn lookup_field(name: &str) -> Option<InputField> {
    InputField::from_key(name).or(match name {
        "berat_kotor" => Some(InputField::GrossWeight),
        "waktu" => Some(InputField::ElapsedTime),
        "jam" | "berapa_jam" => Some(InputField::Hours),
        "ketinggian" => Some(InputField::PowderHeight),
        "berat_basah" => Some(InputField::WetWeight),
        "mc_in" | "kadar_air_masuk" => Some(InputField::MoistureIn),
        "mc_out" | "kadar_air_keluar" => Some(InputField::MoistureOut),
        "waktu_isi" => Some(InputField::FillTime),
        _ => None,
    })
}

/// Parses one line: `field = value`, or a command word.
pub fn parse_line(line: &str) -> Result<Command, SessionError> {
    let line = line.trim();

    if let Some((name, value)) = line.split_once('=') {
        let name = name.trim().to_ascii_lowercase();
        let field = lookup_field(&name).ok_or(SessionError::UnknownField(name))?;
        let value = value.trim();
        let value = value
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| SessionError::BadNumber(value.to_owned()))?;
        return Ok(Command::Set(field, value));
    }

    match line.to_ascii_lowercase().as_str() {
        "hitung" | "calc" | "calculate" => Ok(Command::Submit),
        "tampil" | "show" => Ok(Command::Show),
        "bantuan" | "help" | "?" => Ok(Command::Help),
        "keluar" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(SessionError::UnknownCommand(other.to_owned())),
    }
}

pub struct Session {
    model: ModelKind,
    trigger: RecomputeTrigger,
    height: HeightModelConfig,
    dryer: DryerModelConfig,
    values: BTreeMap<usize, f64>,
}

impl Session {
    pub fn new(
        model: ModelKind,
        trigger: RecomputeTrigger,
        height: HeightModelConfig,
        dryer: DryerModelConfig,
    ) -> Self {
        Self {
            model,
            trigger,
            height,
            dryer,
            values: BTreeMap::new(),
        }
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Current value of a field, if entered.
    pub fn value(&self, field: InputField) -> Option<f64> {
        self.slot(field).and_then(|slot| self.values.get(&slot).copied())
    }

    /// Stores a measurement.
    ///
    /// Negative values are rejected without being stored. Otherwise the
    /// session recomputes when the trigger is [`RecomputeTrigger::OnChange`]
    /// and returns `None` when it is [`RecomputeTrigger::OnSubmit`].
    pub fn set(&mut self, field: InputField, value: f64) -> Result<Option<Outcome>, SessionError> {
        let slot = self.slot(field).ok_or(SessionError::WrongModel(field))?;

        if let Err(reason) = NonNegative::new(value) {
            return Ok(Some(Outcome::Rejected(InvalidInput::new(field, reason))));
        }

        self.values.insert(slot, value);
        debug!(%field, value, "measurement stored");

        Ok(match self.trigger {
            RecomputeTrigger::OnChange => Some(self.evaluate()),
            RecomputeTrigger::OnSubmit => None,
        })
    }

    /// Runs the model on the current values, regardless of trigger.
    pub fn evaluate(&self) -> Outcome {
        let fields = self.model.fields();
        let missing: Vec<_> = fields
            .iter()
            .copied()
            .filter(|field| self.value(*field).is_none())
            .collect();
        if !missing.is_empty() {
            return Outcome::Incomplete(missing);
        }

        let v = |slot: usize| self.values[&slot];
        let computed = match self.model {
            ModelKind::Height => compute_height_capacity(
                &HeightModelInput::from_shop_units(v(0), v(1), v(2), v(3)),
                &self.height,
            ),
            ModelKind::Dryer => compute_dryer_capacity(
                &DryerModelInput::from_shop_units(v(0), v(1), v(2), v(3)),
                &self.dryer,
            ),
        };

        match computed {
            Ok(result) => {
                info!(model = ?self.model, per_hour_ton = result.per_hour_tons(), "computed");
                Outcome::Computed(result)
            }
            Err(err) => Outcome::Rejected(err),
        }
    }

    fn slot(&self, field: InputField) -> Option<usize> {
        self.model.fields().iter().position(|f| *f == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use kapasitas_models::support::constraint::ConstraintError;

    fn session(model: ModelKind, trigger: RecomputeTrigger) -> Session {
        Session::new(
            model,
            trigger,
            HeightModelConfig::default(),
            DryerModelConfig::default(),
        )
    }

    #[test]
    fn parses_fields_and_commands() {
        assert_eq!(
            parse_line("gross_weight = 100"),
            Ok(Command::Set(InputField::GrossWeight, 100.0))
        );
        assert_eq!(
            parse_line("  Ketinggian=1,5 "),
            Ok(Command::Set(InputField::PowderHeight, 1.5))
        );
        assert_eq!(parse_line("HITUNG"), Ok(Command::Submit));
        assert_eq!(parse_line("keluar"), Ok(Command::Quit));
        assert_eq!(
            parse_line("speed = 3"),
            Err(SessionError::UnknownField("speed".into()))
        );
        assert_eq!(
            parse_line("waktu = abc"),
            Err(SessionError::BadNumber("abc".into()))
        );
        assert!(matches!(
            parse_line("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn on_change_recomputes_after_every_field() {
        let mut s = session(ModelKind::Height, RecomputeTrigger::OnChange);

        let outcome = s.set(InputField::GrossWeight, 100.0).unwrap();
        assert!(matches!(outcome, Some(Outcome::Incomplete(ref m)) if m.len() == 3));

        s.set(InputField::ElapsedTime, 10.0).unwrap();
        s.set(InputField::Hours, 2.0).unwrap();
        let Some(Outcome::Computed(result)) = s.set(InputField::PowderHeight, 1.5).unwrap() else {
            panic!("expected a computed result");
        };
        assert_relative_eq!(result.per_hour_tons(), 34.56, max_relative = 1e-12);
    }

    #[test]
    fn on_submit_waits_for_explicit_request() {
        let mut s = session(ModelKind::Dryer, RecomputeTrigger::OnSubmit);
        for (field, value) in [
            (InputField::WetWeight, 11.0),
            (InputField::MoistureIn, 0.55),
            (InputField::MoistureOut, 0.15),
            (InputField::FillTime, 14.0),
        ] {
            assert_eq!(s.set(field, value).unwrap(), None);
        }

        let Outcome::Computed(result) = s.evaluate() else {
            panic!("expected a computed result");
        };
        assert_relative_eq!(result.per_hour_tons(), 1.497, epsilon = 1e-3);
    }

    #[test]
    fn negative_values_are_rejected_at_the_boundary() {
        let mut s = session(ModelKind::Height, RecomputeTrigger::OnSubmit);
        let outcome = s.set(InputField::GrossWeight, -1.0).unwrap();
        assert_eq!(
            outcome,
            Some(Outcome::Rejected(InvalidInput::new(
                InputField::GrossWeight,
                ConstraintError::Negative
            )))
        );
        assert_eq!(s.value(InputField::GrossWeight), None);
    }

    #[test]
    fn model_errors_surface_as_rejections() {
        let mut s = session(ModelKind::Height, RecomputeTrigger::OnChange);
        s.set(InputField::GrossWeight, 100.0).unwrap();
        s.set(InputField::ElapsedTime, 0.0).unwrap();
        s.set(InputField::Hours, 1.0).unwrap();
        let outcome = s.set(InputField::PowderHeight, 1.0).unwrap();
        assert!(matches!(
            outcome,
            Some(Outcome::Rejected(InvalidInput {
                field: InputField::ElapsedTime,
                ..
            }))
        ));
    }

    #[test]
    fn fields_of_other_model_are_refused() {
        let mut s = session(ModelKind::Dryer, RecomputeTrigger::OnChange);
        assert_eq!(
            s.set(InputField::PowderHeight, 1.0),
            Err(SessionError::WrongModel(InputField::PowderHeight))
        );
    }
}
