//! Plain-text shift reports.
//!
//! A [`ShiftReport`] collects throughput readings taken during one shift and
//! renders them as a short production log. Rendering takes an explicit
//! [`Locale`].
//!
//! ```
//! use jiff::civil::{date, time};
//! use kapasitas_models::support::{
//!     locale::Locale,
//!     report::{LogEntry, Shift, ShiftReport},
//!     units::Throughput,
//! };
//! use uom::si::f64::MassRate;
//!
//! let mut report = ShiftReport::new(date(2026, 10, 18), Shift::First);
//! report
//!     .record(LogEntry::new(time(8, 0, 0, 0), MassRate::from_kilograms_per_hour(34_560.0)))
//!     .unwrap();
//!
//! let text = report.render(Locale::Indonesian);
//! assert!(text.contains("Minggu, 18 Oktober 2026"));
//! assert!(text.contains("34.56 ton/jam"));
//! ```

mod shift;

pub use shift::Shift;

use std::fmt;

use jiff::civil::{Date, Time};
use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Mass, MassRate},
        mass::ton,
    },
};

use crate::support::{locale::Locale, units::Throughput};

use shift::clock;

/// A single throughput reading in the production log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Clock time of the reading.
    pub time: Time,

    /// Measured throughput.
    pub throughput: MassRate,

    /// Free-form remark printed after the figure.
    pub note: Option<String>,
}

impl LogEntry {
    /// Creates an entry without a remark.
    #[must_use]
    pub fn new(time: Time, throughput: MassRate) -> Self {
        Self {
            time,
            throughput,
            note: None,
        }
    }

    /// Attaches a remark to the entry.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Errors raised while building a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The reading was taken outside the report's shift window.
    #[error("entry at {time} lies outside shift {shift}")]
    OutsideShift { time: Time, shift: Shift },
}

/// Production log for one shift on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftReport {
    pub date: Date,
    pub shift: Shift,
    pub operator: Option<String>,
    entries: Vec<LogEntry>,
}

impl ShiftReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(date: Date, shift: Shift) -> Self {
        Self {
            date,
            shift,
            operator: None,
            entries: Vec::new(),
        }
    }

    /// Sets the operator name printed in the header.
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Appends a reading, keeping entries ordered by time within the shift.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::OutsideShift`] if the reading's time is not
    /// inside the shift window.
    pub fn record(&mut self, entry: LogEntry) -> Result<(), ReportError> {
        if !self.shift.contains(entry.time) {
            return Err(ReportError::OutsideShift {
                time: entry.time,
                shift: self.shift,
            });
        }

        let key = self.elapsed_key(entry.time);
        let index = self
            .entries
            .partition_point(|existing| self.elapsed_key(existing.time) <= key);
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Readings in shift order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Mean throughput over all readings, or `None` for an empty log.
    #[must_use]
    pub fn average_throughput(&self) -> Option<MassRate> {
        if self.entries.is_empty() {
            return None;
        }
        let sum = self
            .entries
            .iter()
            .fold(MassRate::ZERO, |acc, entry| acc + entry.throughput);
        #[allow(clippy::cast_precision_loss)]
        let count = self.entries.len() as f64;
        Some(sum / count)
    }

    /// Output expected if the average throughput held for the whole shift.
    #[must_use]
    pub fn estimated_output(&self) -> Option<Mass> {
        self.average_throughput()
            .map(|average| average * Shift::duration())
    }

    /// Returns a [`fmt::Display`] view of the report in the given locale.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> Localized<'_> {
        Localized {
            report: self,
            locale,
        }
    }

    /// Renders the report as text in the given locale.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        self.localized(locale).to_string()
    }

    /// Minutes since shift start, so the night shift sorts across midnight.
    fn elapsed_key(&self, at: Time) -> i32 {
        let minutes = |t: Time| i32::from(t.hour()) * 60 + i32::from(t.minute());
        (minutes(at) - minutes(self.shift.start())).rem_euclid(24 * 60)
    }
}

struct Labels {
    title: &'static str,
    date: &'static str,
    shift: &'static str,
    operator: &'static str,
    empty: &'static str,
    count: &'static str,
    average: &'static str,
    estimate: &'static str,
    rate_unit: &'static str,
    mass_unit: &'static str,
}

const LABELS_ID: Labels = Labels {
    title: "LAPORAN PRODUKSI",
    date: "Tanggal",
    shift: "Shift",
    operator: "Operator",
    empty: "(belum ada catatan)",
    count: "Jumlah catatan",
    average: "Rata-rata",
    estimate: "Perkiraan produksi",
    rate_unit: "ton/jam",
    mass_unit: "ton",
};

const LABELS_EN: Labels = Labels {
    title: "PRODUCTION REPORT",
    date: "Date",
    shift: "Shift",
    operator: "Operator",
    empty: "(no entries yet)",
    count: "Entries",
    average: "Average",
    estimate: "Estimated output",
    rate_unit: "ton/h",
    mass_unit: "ton",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Indonesian => &LABELS_ID,
        Locale::English => &LABELS_EN,
    }
}

/// A report paired with the locale it renders in.
pub struct Localized<'a> {
    report: &'a ShiftReport,
    locale: Locale,
}

impl fmt::Display for Localized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "----------------------------------------";

        let report = self.report;
        let text = labels(self.locale);

        writeln!(f, "{}", text.title)?;
        writeln!(
            f,
            "{:<18} : {}",
            text.date,
            self.locale.format_date(report.date)
        )?;
        writeln!(f, "{:<18} : {}", text.shift, report.shift)?;
        if let Some(operator) = &report.operator {
            writeln!(f, "{:<18} : {operator}", text.operator)?;
        }
        writeln!(f, "{RULE}")?;

        if report.entries.is_empty() {
            writeln!(f, "{}", text.empty)?;
        }
        for entry in &report.entries {
            write!(
                f,
                "{}  {:>8.2} {}",
                clock(entry.time),
                entry.throughput.tons_per_hour(),
                text.rate_unit
            )?;
            if let Some(note) = &entry.note {
                write!(f, "  {note}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{RULE}")?;
        writeln!(f, "{:<18} : {}", text.count, report.entries.len())?;
        if let (Some(average), Some(output)) =
            (report.average_throughput(), report.estimated_output())
        {
            writeln!(
                f,
                "{:<18} : {:.2} {}",
                text.average,
                average.tons_per_hour(),
                text.rate_unit
            )?;
            writeln!(
                f,
                "{:<18} : {:.2} {}",
                text.estimate,
                output.get::<ton>(),
                text.mass_unit
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::civil::{date, time};

    fn tph(value: f64) -> MassRate {
        MassRate::from_kilograms_per_hour(value * 1000.0)
    }

    #[test]
    fn rejects_readings_outside_the_shift() {
        let mut report = ShiftReport::new(date(2026, 10, 18), Shift::Second);
        let err = report
            .record(LogEntry::new(time(9, 0, 0, 0), tph(30.0)))
            .unwrap_err();
        assert_eq!(
            err,
            ReportError::OutsideShift {
                time: time(9, 0, 0, 0),
                shift: Shift::Second,
            }
        );
        assert!(report.entries().is_empty());
    }

    #[test]
    fn night_shift_orders_across_midnight() {
        let mut report = ShiftReport::new(date(2026, 10, 18), Shift::Third);
        report
            .record(LogEntry::new(time(2, 0, 0, 0), tph(20.0)))
            .unwrap();
        report
            .record(LogEntry::new(time(23, 30, 0, 0), tph(10.0)))
            .unwrap();
        report
            .record(LogEntry::new(time(6, 45, 0, 0), tph(30.0)))
            .unwrap();

        let hours: Vec<i8> = report.entries().iter().map(|e| e.time.hour()).collect();
        assert_eq!(hours, vec![23, 2, 6]);
    }

    #[test]
    fn summary_figures() {
        let mut report = ShiftReport::new(date(2026, 10, 18), Shift::First);
        assert!(report.average_throughput().is_none());

        report
            .record(LogEntry::new(time(8, 0, 0, 0), tph(30.0)))
            .unwrap();
        report
            .record(LogEntry::new(time(12, 0, 0, 0), tph(40.0)))
            .unwrap();

        let average = report.average_throughput().unwrap();
        assert_relative_eq!(average.tons_per_hour(), 35.0, epsilon = 1e-9);
        let output = report.estimated_output().unwrap();
        assert_relative_eq!(output.get::<ton>(), 280.0, epsilon = 1e-9);
    }

    #[test]
    fn renders_in_both_locales() {
        let mut report =
            ShiftReport::new(date(2025, 3, 3), Shift::First).with_operator("Sari");
        report
            .record(LogEntry::new(time(9, 5, 0, 0), tph(34.56)).with_note("serbuk kering"))
            .unwrap();

        let id = report.render(Locale::Indonesian);
        assert!(id.starts_with("LAPORAN PRODUKSI\n"));
        assert!(id.contains("Senin, 3 Maret 2025"));
        assert!(id.contains("1 (07:00 - 15:00)"));
        assert!(id.contains("Sari"));
        assert!(id.contains("09:05     34.56 ton/jam  serbuk kering"));
        assert!(id.contains("276.48 ton"));

        let en = report.render(Locale::English);
        assert!(en.starts_with("PRODUCTION REPORT\n"));
        assert!(en.contains("Monday, 3 March 2025"));
        assert!(en.contains("34.56 ton/h"));
    }

    #[test]
    fn empty_report_has_placeholder() {
        let report = ShiftReport::new(date(2026, 10, 18), Shift::Second);
        let text = report.render(Locale::English);
        assert!(text.contains("(no entries yet)"));
        assert!(!text.contains("Average"));
    }
}
