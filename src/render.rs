//! Localized text for results and errors.

use kapasitas_models::{
    models::production::capacity::{Breakdown, CapacityResult, InputField, InvalidInput},
    support::{constraint::ConstraintError, locale::Locale},
};

/// Human-readable name of a measurement.
pub fn field_label(field: InputField, locale: Locale) -> &'static str {
    match (locale, field) {
        (Locale::Indonesian, InputField::GrossWeight) => "Berat kotor (kg)",
        (Locale::Indonesian, InputField::ElapsedTime) => "Waktu (detik)",
        (Locale::Indonesian, InputField::Hours) => "Jumlah jam",
        (Locale::Indonesian, InputField::PowderHeight) => "Ketinggian serbuk (meter)",
        (Locale::Indonesian, InputField::WetWeight) => "Berat basah (kg)",
        (Locale::Indonesian, InputField::MoistureIn) => "Kadar air masuk",
        (Locale::Indonesian, InputField::MoistureOut) => "Kadar air keluar",
        (Locale::Indonesian, InputField::FillTime) => "Waktu isi (detik)",
        (Locale::English, InputField::GrossWeight) => "Gross weight (kg)",
        (Locale::English, InputField::ElapsedTime) => "Elapsed time (s)",
        (Locale::English, InputField::Hours) => "Hours",
        (Locale::English, InputField::PowderHeight) => "Powder height (m)",
        (Locale::English, InputField::WetWeight) => "Wet weight (kg)",
        (Locale::English, InputField::MoistureIn) => "Moisture in",
        (Locale::English, InputField::MoistureOut) => "Moisture out",
        (Locale::English, InputField::FillTime) => "Fill time (s)",
    }
}

fn requires_positive(field: InputField) -> bool {
    matches!(
        field,
        InputField::ElapsedTime | InputField::Hours | InputField::FillTime
    )
}

/// User-facing message for a rejected input.
pub fn invalid_input(err: &InvalidInput, locale: Locale) -> String {
    let name = field_label(err.field, locale);
    let positive = requires_positive(err.field);

    match (locale, err.reason) {
        (Locale::Indonesian, ConstraintError::Zero | ConstraintError::Negative) if positive => {
            format!("{name} harus lebih besar dari 0")
        }
        (Locale::Indonesian, ConstraintError::Negative | ConstraintError::BelowMinimum) => {
            format!("{name} tidak boleh negatif")
        }
        (Locale::Indonesian, ConstraintError::AboveMaximum) if err.field == InputField::MoistureOut => {
            format!("{name} harus kurang dari 1")
        }
        (Locale::Indonesian, ConstraintError::AboveMaximum) => {
            format!("{name} tidak boleh lebih dari 1")
        }
        (Locale::Indonesian, ConstraintError::NotANumber) => format!("{name} bukan angka"),
        (Locale::English, ConstraintError::Zero | ConstraintError::Negative) if positive => {
            format!("{name} must be greater than 0")
        }
        (Locale::English, ConstraintError::Negative | ConstraintError::BelowMinimum) => {
            format!("{name} must not be negative")
        }
        (Locale::English, ConstraintError::AboveMaximum) if err.field == InputField::MoistureOut => {
            format!("{name} must be less than 1")
        }
        (Locale::English, ConstraintError::AboveMaximum) => {
            format!("{name} must not exceed 1")
        }
        (Locale::English, ConstraintError::NotANumber) => format!("{name} is not a number"),
        (_, reason) => format!("{name}: {reason}"),
    }
}

/// Headline figures of a result.
///
/// `hours` is printed with the total, when the result has one.
pub fn result_lines(result: &CapacityResult, hours: f64, locale: Locale) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    match locale {
        Locale::Indonesian => {
            lines.push(format!("Hasil per jam: {:.2} ton/jam", result.per_hour_tons()));
            if let Some(total) = result.total_tons() {
                lines.push(format!("Hasil total untuk {hours:.2} jam: {total:.2} ton"));
            }
        }
        Locale::English => {
            lines.push(format!("Output per hour: {:.2} ton/h", result.per_hour_tons()));
            if let Some(total) = result.total_tons() {
                lines.push(format!("Total output for {hours:.2} h: {total:.2} ton"));
            }
        }
    }
    lines
}

/// One line per intermediate value, labels padded to a common width.
pub fn breakdown_lines(breakdown: &Breakdown) -> Vec<String> {
    let width = breakdown
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    breakdown
        .iter()
        .map(|(label, value)| format!("{label:<width$} : {value:.4}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use kapasitas_models::models::production::capacity::{
        DryerModelConfig, DryerModelInput, HeightModelConfig, HeightModelInput,
        compute_dryer_capacity, compute_height_capacity,
    };

    #[test]
    fn headline_wording() {
        let result = compute_height_capacity(
            &HeightModelInput::from_shop_units(100.0, 10.0, 2.0, 1.5),
            &HeightModelConfig::default(),
        )
        .unwrap();

        assert_eq!(
            result_lines(&result, 2.0, Locale::Indonesian),
            [
                "Hasil per jam: 34.56 ton/jam",
                "Hasil total untuk 2.00 jam: 69.12 ton",
            ]
        );
        assert_eq!(
            result_lines(&result, 2.0, Locale::English),
            [
                "Output per hour: 34.56 ton/h",
                "Total output for 2.00 h: 69.12 ton",
            ]
        );
    }

    #[test]
    fn single_line_without_total() {
        let result = compute_dryer_capacity(
            &DryerModelInput::from_shop_units(11.0, 0.55, 0.15, 14.0),
            &DryerModelConfig::default(),
        )
        .unwrap();
        assert_eq!(
            result_lines(&result, 1.0, Locale::Indonesian),
            ["Hasil per jam: 1.50 ton/jam"]
        );
    }

    #[test]
    fn error_messages() {
        let err = InvalidInput::new(InputField::ElapsedTime, ConstraintError::Zero);
        assert_eq!(
            invalid_input(&err, Locale::Indonesian),
            "Waktu (detik) harus lebih besar dari 0"
        );

        let err = InvalidInput::new(InputField::GrossWeight, ConstraintError::Negative);
        assert_eq!(
            invalid_input(&err, Locale::English),
            "Gross weight (kg) must not be negative"
        );

        let err = InvalidInput::new(InputField::MoistureOut, ConstraintError::AboveMaximum);
        assert_eq!(
            invalid_input(&err, Locale::Indonesian),
            "Kadar air keluar harus kurang dari 1"
        );
    }

    #[test]
    fn breakdown_is_aligned() {
        let result = compute_dryer_capacity(
            &DryerModelInput::from_shop_units(11.0, 0.55, 0.15, 14.0),
            &DryerModelConfig::default(),
        )
        .unwrap();
        let lines = breakdown_lines(&result.breakdown);
        assert_eq!(lines.len(), result.breakdown.len());
        assert!(lines[0].starts_with("wet weight (kg)"));
        let colons: Vec<_> = lines.iter().map(|l| l.find(" : ").unwrap()).collect();
        assert!(colons.windows(2).all(|w| w[0] == w[1]));
    }
}
