//! Number formatting for table cells and KPI tiles

/// Format `value` with `decimals` fraction digits and comma thousands separators.
///
/// Non-finite values are rendered as an empty cell. Negative values keep their
/// sign even when they round to zero, so `-0.01` at one decimal is `-0.0`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Growth multiple such as `3.0×`
pub fn format_multiple(value: f64) -> String {
    format!("{value:.1}×")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0, "0")]
    #[case(999.4, 0, "999")]
    #[case(1_000.0, 0, "1,000")]
    #[case(1_234_567.891, 2, "1,234,567.89")]
    #[case(2_113.6, 0, "2,114")]
    #[case(7.08, 1, "7.1")]
    #[case(-45_000.5, 1, "-45,000.5")]
    #[case(-0.01, 1, "-0.0")]
    #[case(-0.0, 0, "-0")]
    #[case(100_000.0, 2, "100,000.00")]
    fn test_format_grouped(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(format_grouped(value, decimals), expected);
    }

    #[test]
    fn test_non_finite_is_blank() {
        assert_eq!(format_grouped(f64::NAN, 2), "");
        assert_eq!(format_grouped(f64::INFINITY, 0), "");
    }

    #[test]
    fn test_format_multiple() {
        assert_eq!(format_multiple(3.0), "3.0×");
        assert_eq!(format_multiple(1.875), "1.9×");
    }
}
