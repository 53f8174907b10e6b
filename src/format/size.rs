//! File-size labels ("30.7 MB", "8.3 GB").

use super::FormatError;

/// Unit suffixes by power of 1024.
const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Byte count scaled to the largest unit it fills, one fractional digit.
///
/// Zero is pinned to "0.0 B" since log(0) has no magnitude; negative and
/// non-finite sizes are rejected.
pub fn file_size_label(bytes: f64) -> Result<String, FormatError> {
    if !bytes.is_finite() {
        return Err(FormatError::invalid(format!("non-finite size: {}", bytes)));
    }
    if bytes < 0.0 {
        return Err(FormatError::invalid(format!("negative size: {}", bytes)));
    }
    if bytes == 0.0 {
        return Ok("0.0 B".to_string());
    }

    let index = (bytes.ln() / 1024f64.ln())
        .floor()
        .clamp(0.0, (UNITS.len() - 1) as f64) as usize;

    Ok(format!(
        "{:.1} {}",
        bytes / 1024f64.powi(index as i32),
        UNITS[index]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_examples() {
        assert_eq!(file_size_label(32143332.0).unwrap(), "30.7 MB");
        assert_eq!(file_size_label(8904869085.0).unwrap(), "8.3 GB");
    }

    #[test]
    fn test_zero_is_pinned() {
        assert_eq!(file_size_label(0.0).unwrap(), "0.0 B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(file_size_label(1023.0).unwrap(), "1023.0 B");
        assert_eq!(file_size_label(1024.0).unwrap(), "1.0 KB");
        assert_eq!(file_size_label(1024.0 * 1024.0).unwrap(), "1.0 MB");
    }

    #[test]
    fn test_index_clamps_at_terabytes() {
        let five_powers = 1024f64.powi(5);
        assert_eq!(file_size_label(five_powers).unwrap(), "1024.0 TB");
    }

    #[test]
    fn test_fractional_bytes_stay_in_the_byte_bucket() {
        assert_eq!(file_size_label(0.5).unwrap(), "0.5 B");
    }

    #[test]
    fn test_negative_and_non_finite_are_rejected() {
        assert!(file_size_label(-1.0).is_err());
        assert!(file_size_label(f64::NAN).is_err());
        assert!(file_size_label(f64::INFINITY).is_err());
    }

    #[test]
    fn test_monotone_within_a_bucket() {
        let mut last = 0.0f64;
        for bytes in [2_000_000.0, 5_000_000.0, 20_000_000.0, 900_000_000.0] {
            let label = file_size_label(bytes).unwrap();
            let prefix: f64 = label
                .split(' ')
                .next()
                .unwrap()
                .parse()
                .expect("numeric prefix");
            assert_eq!(label.split(' ').nth(1), Some("MB"));
            assert!(prefix >= last, "{} < {}", prefix, last);
            last = prefix;
        }
    }
}
