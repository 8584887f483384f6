use uom::{
    ConstZero,
    si::{
        f64::{Length, Ratio},
        ratio::ratio,
    },
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Height correction applied to the base rate, tagged by branch.
///
/// For a pile of height `h` and reference height `r`:
///
/// - `h > r` gives `sqrt(h / r)`
/// - `0 < h <= r` gives `h / r`
/// - anything else, `NaN` included, gives the fallback multiplier
///
/// Both formulas equal one at `h = r`, so the multiplier is continuous there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightCorrection {
    /// Pile taller than the reference.
    Tall(Ratio),

    /// Pile at or below the reference.
    Proportional(Ratio),

    /// No usable pile height.
    Missing(Ratio),
}

impl HeightCorrection {
    /// Selects the branch for `height` and computes its multiplier.
    #[must_use]
    pub fn new(
        height: Length,
        reference: Constrained<Length, StrictlyPositive>,
        fallback: Ratio,
    ) -> Self {
        let reference = reference.into_inner();
        let relative: Ratio = height / reference;

        if height > reference {
            Self::Tall(Ratio::new::<ratio>(relative.get::<ratio>().sqrt()))
        } else if height > Length::ZERO {
            Self::Proportional(relative)
        } else {
            Self::Missing(fallback)
        }
    }

    /// The multiplier, whatever the branch.
    #[must_use]
    pub fn multiplier(&self) -> Ratio {
        match *self {
            Self::Tall(m) | Self::Proportional(m) | Self::Missing(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::meter;

    fn correct(height_m: f64) -> HeightCorrection {
        HeightCorrection::new(
            Length::new::<meter>(height_m),
            StrictlyPositive::new(Length::new::<meter>(1.5)).unwrap(),
            Ratio::new::<ratio>(0.5),
        )
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn continuous_at_reference_height() {
        let at = correct(1.5);
        assert!(matches!(at, HeightCorrection::Proportional(_)));
        assert_eq!(at.multiplier().get::<ratio>(), 1.0);

        // sqrt(1.5 / 1.5) from the tall branch agrees.
        assert_eq!((1.5_f64 / 1.5).sqrt(), 1.0);

        let just_above = correct(1.5 + 1e-9).multiplier().get::<ratio>();
        assert_relative_eq!(just_above, 1.0, epsilon = 1e-9);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_height_uses_fallback_exactly() {
        let zero = correct(0.0);
        assert_eq!(zero, HeightCorrection::Missing(Ratio::new::<ratio>(0.5)));
        assert_eq!(zero.multiplier().get::<ratio>(), 0.5);
        assert_eq!(correct(-2.0).multiplier().get::<ratio>(), 0.5);
        assert_eq!(correct(f64::NAN).multiplier().get::<ratio>(), 0.5);
    }

    #[test]
    fn tall_pile_grows_with_square_root() {
        let tall = correct(6.0);
        assert!(matches!(tall, HeightCorrection::Tall(_)));
        assert_relative_eq!(tall.multiplier().get::<ratio>(), 2.0);
    }

    #[test]
    fn short_pile_scales_linearly() {
        assert_relative_eq!(correct(0.75).multiplier().get::<ratio>(), 0.5);
        assert_relative_eq!(correct(0.3).multiplier().get::<ratio>(), 0.2);
    }
}
