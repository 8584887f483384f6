use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Names a measurement supplied to a capacity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    GrossWeight,
    ElapsedTime,
    Hours,
    PowderHeight,
    WetWeight,
    MoistureIn,
    MoistureOut,
    FillTime,
}

impl InputField {
    /// Every field, height model first.
    pub const ALL: [Self; 8] = [
        Self::GrossWeight,
        Self::ElapsedTime,
        Self::Hours,
        Self::PowderHeight,
        Self::WetWeight,
        Self::MoistureIn,
        Self::MoistureOut,
        Self::FillTime,
    ];

    /// Stable snake-case key, used in configuration and interactive input.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::GrossWeight => "gross_weight",
            Self::ElapsedTime => "elapsed_time",
            Self::Hours => "hours",
            Self::PowderHeight => "powder_height",
            Self::WetWeight => "wet_weight",
            Self::MoistureIn => "moisture_in",
            Self::MoistureOut => "moisture_out",
            Self::FillTime => "fill_time",
        }
    }

    /// Looks a field up by its [`key`](Self::key).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A measurement failed a precondition, so no capacity was computed.
///
/// This is the only failure the capacity models report. It covers inputs
/// that would divide by zero (elapsed time, fill time, outlet moisture) and
/// a missing positive duration when the configuration requires one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input `{field}`: {reason}")]
pub struct InvalidInput {
    /// The offending measurement.
    pub field: InputField,

    /// The violated constraint.
    #[source]
    pub reason: ConstraintError,
}

impl InvalidInput {
    /// Creates an error for `field`.
    #[must_use]
    pub fn new(field: InputField, reason: ConstraintError) -> Self {
        Self { field, reason }
    }

    /// Returns a closure that tags a [`ConstraintError`] with `field`.
    ///
    /// Intended for `map_err` after a constraint check.
    pub fn on(field: InputField) -> impl Fn(ConstraintError) -> Self {
        move |reason| Self::new(field, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for field in InputField::ALL {
            assert_eq!(InputField::from_key(field.key()), Some(field));
        }
        assert_eq!(InputField::from_key("speed"), None);
    }

    #[test]
    fn message_names_field_and_reason() {
        let err = InvalidInput::new(InputField::FillTime, ConstraintError::Zero);
        assert_eq!(
            err.to_string(),
            "invalid input `fill_time`: value must not be zero"
        );
    }
}
