use std::fmt;

use jiff::civil::{Time, time};
use uom::si::{f64::Time as Duration, time::hour};

/// One of the three eight-hour production shifts.
///
/// | Shift | Window        |
/// |-------|---------------|
/// | 1     | 07:00 - 15:00 |
/// | 2     | 15:00 - 23:00 |
/// | 3     | 23:00 - 07:00 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    First,
    Second,
    Third,
}

impl Shift {
    /// Returns the shift number as printed on reports (1, 2 or 3).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Returns the shift with the given number, if any.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    /// Clock time at which the shift starts.
    #[must_use]
    pub fn start(self) -> Time {
        match self {
            Self::First => time(7, 0, 0, 0),
            Self::Second => time(15, 0, 0, 0),
            Self::Third => time(23, 0, 0, 0),
        }
    }

    /// Clock time at which the shift ends (start of the next shift).
    #[must_use]
    pub fn end(self) -> Time {
        match self {
            Self::First => Self::Second.start(),
            Self::Second => Self::Third.start(),
            Self::Third => Self::First.start(),
        }
    }

    /// Length of every shift.
    #[must_use]
    pub fn duration() -> Duration {
        Duration::new::<hour>(8.0)
    }

    /// Returns the shift whose window contains `at`.
    #[must_use]
    pub fn containing(at: Time) -> Self {
        if at >= Self::First.start() && at < Self::First.end() {
            Self::First
        } else if at >= Self::Second.start() && at < Self::Second.end() {
            Self::Second
        } else {
            Self::Third
        }
    }

    /// Returns `true` if `at` falls inside this shift's window.
    #[must_use]
    pub fn contains(self, at: Time) -> bool {
        Self::containing(at) == self
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.number(),
            clock(self.start()),
            clock(self.end())
        )
    }
}

/// Formats a civil time as `HH:MM`.
pub(super) fn clock(at: Time) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_partition_the_day() {
        assert_eq!(Shift::containing(time(7, 0, 0, 0)), Shift::First);
        assert_eq!(Shift::containing(time(14, 59, 59, 0)), Shift::First);
        assert_eq!(Shift::containing(time(15, 0, 0, 0)), Shift::Second);
        assert_eq!(Shift::containing(time(23, 0, 0, 0)), Shift::Third);
        assert_eq!(Shift::containing(time(0, 30, 0, 0)), Shift::Third);
        assert_eq!(Shift::containing(time(6, 59, 0, 0)), Shift::Third);
    }

    #[test]
    fn numbering() {
        for number in 1..=3 {
            let shift = Shift::from_number(number).unwrap();
            assert_eq!(shift.number(), number);
        }
        assert_eq!(Shift::from_number(0), None);
        assert_eq!(Shift::from_number(4), None);
    }

    #[test]
    fn display_shows_window() {
        assert_eq!(Shift::Third.to_string(), "3 (23:00 - 07:00)");
    }
}
