//! Display formatters for bubble fields
//!
//! A formatter projects raw input onto the text a field displays. Every
//! formatter must be idempotent: `f(f(s)) == f(s)`. Fields apply the
//! formatter on every render, so a formatter that keeps changing its own
//! output makes the displayed text drift. This is a precondition and is not
//! checked at runtime.

use std::sync::Arc;

use serde::Deserialize;

/// Shared formatter function
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Pass input through unchanged
pub fn identity() -> Formatter {
    Arc::new(|s: &str| s.to_string())
}

/// Named formatter, selectable from configuration and scenario files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatKind {
    #[default]
    Identity,
    /// Strip everything except ASCII digits
    Digits,
    /// Amount with at most `max_decimals` fractional digits
    Decimal { max_decimals: usize },
    /// Fiat amount, two fractional digits
    Fiat,
}

impl FormatKind {
    pub fn formatter(self) -> Formatter {
        match self {
            FormatKind::Identity => identity(),
            FormatKind::Digits => Arc::new(digits_only),
            FormatKind::Decimal { max_decimals } => {
                Arc::new(move |s: &str| decimal_amount(s, max_decimals))
            }
            FormatKind::Fiat => Arc::new(|s: &str| decimal_amount(s, 2)),
        }
    }
}

/// Keep ASCII digits only
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a typed amount.
///
/// Drops everything but digits and the first `.`, truncates the fraction to
/// `max_decimals`, strips redundant leading zeros and writes a bare leading
/// point as `0.`. A trailing point is kept so the user can keep typing.
pub fn decimal_amount(input: &str, max_decimals: usize) -> String {
    let mut int_part = String::new();
    let mut frac_part = String::new();
    let mut seen_point = false;

    for c in input.chars() {
        match c {
            '0'..='9' if seen_point => frac_part.push(c),
            '0'..='9' => int_part.push(c),
            '.' if !seen_point => seen_point = true,
            _ => {}
        }
    }

    if !seen_point && int_part.is_empty() {
        return String::new();
    }

    let trimmed = int_part.trim_start_matches('0');
    let int_part = if trimmed.is_empty() { "0" } else { trimmed };

    if !seen_point || max_decimals == 0 {
        return int_part.to_string();
    }

    frac_part.truncate(max_decimals);
    format!("{}.{}", int_part, frac_part)
}

/// Significant decimal digits an f64 reproduces exactly
const F64_SIGNIFICANT_DIGITS: i32 = 15;

/// Render a number with at most `max_decimals` fractional digits, trailing
/// zeros removed. Used when an owner derives one amount from another.
///
/// Digits beyond the precision of an f64 are rounded away, so
/// `trimmed_amount(200.0 / 2000.0, 18)` is `"0.1"`, not the binary
/// expansion of 0.1.
pub fn trimmed_amount(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    // Decimal exponent of the leading digit, e.g. -1 for 0.1
    let exponent = format!("{:e}", value)
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    let precise_decimals = (F64_SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;

    let fixed = format!("{:.*}", max_decimals.min(precise_decimals), value);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "", "0", "00", "007", ".", "0.", ".5", "1.2.3", "1a2", "12.34567", "abc", "1,5", "000.010",
    ];

    #[test]
    fn test_identity() {
        assert_eq!(identity()("1a2"), "1a2");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("1a2"), "12");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_decimal_amount() {
        assert_eq!(decimal_amount("", 4), "");
        assert_eq!(decimal_amount("abc", 4), "");
        assert_eq!(decimal_amount("007", 4), "7");
        assert_eq!(decimal_amount("00", 4), "0");
        assert_eq!(decimal_amount(".", 4), "0.");
        assert_eq!(decimal_amount(".5", 4), "0.5");
        assert_eq!(decimal_amount("1.2.3", 4), "1.23");
        assert_eq!(decimal_amount("12.34567", 4), "12.3456");
        assert_eq!(decimal_amount("12.5", 0), "12");
        assert_eq!(decimal_amount("000.010", 4), "0.010");
    }

    #[test]
    fn test_builtin_formatters_are_idempotent() {
        let kinds = [
            FormatKind::Identity,
            FormatKind::Digits,
            FormatKind::Decimal { max_decimals: 0 },
            FormatKind::Decimal { max_decimals: 4 },
            FormatKind::Fiat,
        ];
        for kind in kinds {
            let f = kind.formatter();
            for sample in SAMPLES {
                let once = f(sample);
                assert_eq!(f(&once), once, "{:?} not idempotent on {:?}", kind, sample);
            }
        }
    }

    #[test]
    fn test_trimmed_amount() {
        assert_eq!(trimmed_amount(1.5, 4), "1.5");
        assert_eq!(trimmed_amount(2.0, 2), "2");
        assert_eq!(trimmed_amount(0.123456, 4), "0.1235");
        assert_eq!(trimmed_amount(3.0, 0), "3");
        assert_eq!(trimmed_amount(f64::NAN, 2), "");
        assert_eq!(trimmed_amount(f64::INFINITY, 2), "");
    }

    #[test]
    fn test_trimmed_amount_drops_float_noise_at_high_precision() {
        assert_eq!(trimmed_amount(200.0 / 2000.0, 18), "0.1");
        assert_eq!(trimmed_amount(0.1 + 0.2, 18), "0.3");
        assert_eq!(trimmed_amount(1.0 / 3.0, 18), "0.333333333333333");
        assert_eq!(trimmed_amount(0.000123, 18), "0.000123");
        assert_eq!(trimmed_amount(1e20, 18), "100000000000000000000");
        assert_eq!(trimmed_amount(0.0, 18), "0");
    }

    #[test]
    fn test_format_kind_from_yaml() {
        let kind: FormatKind = serde_yaml::from_str("kind: decimal\nmax_decimals: 6").unwrap();
        assert_eq!(kind, FormatKind::Decimal { max_decimals: 6 });
        let kind: FormatKind = serde_yaml::from_str("kind: digits").unwrap();
        assert_eq!(kind, FormatKind::Digits);
    }
}
