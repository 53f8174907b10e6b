//! Compact count labels ("389.2K", "1.2M").

use super::FormatError;

/// Magnitude suffixes by power of 1000.
const SUFFIXES: &[&str] = &["", "K", "M", "B", "T"];

/// en-US compact notation with at most one fractional digit.
///
/// A trailing ".0" is dropped (1000 reads as "1K"), and values past the
/// T suffix keep it with thousands grouping on the integer part.
pub fn compact_number_label(value: f64) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::invalid(format!("non-finite count: {}", value)));
    }

    let mut index = SUFFIXES.len() - 1;
    while index > 0 && value.abs() < 1000f64.powi(index as i32) {
        index -= 1;
    }

    // Rounding can carry into the next magnitude: 999_950 reads as "1M".
    let mut scaled = value / 1000f64.powi(index as i32);
    if index + 1 < SUFFIXES.len() && (scaled * 10.0).round().abs() >= 10_000.0 {
        index += 1;
        scaled = value / 1000f64.powi(index as i32);
    }

    Ok(format!("{}{}", render_one_decimal(scaled), SUFFIXES[index]))
}

/// Render with at most one fractional digit, dropping a trailing ".0" and
/// grouping the integer part with commas.
fn render_one_decimal(value: f64) -> String {
    let rendered = format!("{:.1}", value);
    let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
    group_thousands(rendered)
}

fn group_thousands(rendered: &str) -> String {
    let (number, decimal) = match rendered.split_once('.') {
        Some((n, d)) => (n, Some(d)),
        None => (rendered, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }

    match decimal {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_thousands() {
        assert_eq!(compact_number_label(389210.0).unwrap(), "389.2K");
        assert_eq!(compact_number_label(1000.0).unwrap(), "1K");
        assert_eq!(compact_number_label(1500.0).unwrap(), "1.5K");
    }

    #[test]
    fn test_below_one_thousand_has_no_suffix() {
        assert_eq!(compact_number_label(999.0).unwrap(), "999");
        assert_eq!(compact_number_label(0.0).unwrap(), "0");
        assert_eq!(compact_number_label(12.34).unwrap(), "12.3");
    }

    #[test]
    fn test_larger_magnitudes() {
        assert_eq!(compact_number_label(1_500_000.0).unwrap(), "1.5M");
        assert_eq!(compact_number_label(2_400_000_000.0).unwrap(), "2.4B");
        assert_eq!(compact_number_label(2.5e12).unwrap(), "2.5T");
    }

    #[test]
    fn test_rounding_carries_into_next_suffix() {
        assert_eq!(compact_number_label(999_990.0).unwrap(), "1M");
    }

    #[test]
    fn test_past_the_t_suffix_groups_digits() {
        assert_eq!(compact_number_label(1.5e15).unwrap(), "1,500T");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(compact_number_label(-389210.0).unwrap(), "-389.2K");
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(compact_number_label(f64::NAN).is_err());
        assert!(compact_number_label(f64::INFINITY).is_err());
    }
}
