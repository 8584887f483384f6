use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value is strictly less than one, with no lower bound.
///
/// This is the weakest check that keeps `1 - x` away from zero. Negative
/// values pass, which is how the permissive dryer model treats moisture.
///
/// # Examples
///
/// ```
/// use kapasitas_models::support::constraint::BelowOne;
///
/// assert!(BelowOne::new(0.15).is_ok());
/// assert!(BelowOne::new(-0.2).is_ok());
/// assert!(BelowOne::new(1.0).is_err());
/// assert!(BelowOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BelowOne;

impl BelowOne {
    /// Constructs `Constrained<T, BelowOne>` if value < 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, BelowOne>, ConstraintError> {
        Constrained::<T, BelowOne>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for BelowOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Less) => Ok(()),
            Some(Ordering::Equal | Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
