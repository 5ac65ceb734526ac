//! Utility functions for mapping operations.

/// Parses a cell as a finite number.
///
/// Surrounding whitespace is ignored. Empty, non-numeric, `NaN` and
/// infinite values yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Rounds half away from zero to `decimals` places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Lowercases and collapses runs of whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_padded_values() {
        assert_eq!(parse_number(" 168 "), Some(168.0));
        assert_eq!(parse_number("3.95"), Some(3.95));
        assert_eq!(parse_number("-1"), Some(-1.0));
    }

    #[test]
    fn parse_number_rejects_junk() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("12g"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn round_to_precision() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.14159, 1), 3.1);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(168.0, 2), 168.0);
    }

    #[test]
    fn round_to_keeps_huge_values_finite() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(-1e307, 2), -1e307);
        assert_eq!(round_to(f64::MAX, 1), f64::MAX);
    }

    #[test]
    fn normalize_text_collapses_whitespace() {
        assert_eq!(normalize_text("  Masala   DOSA "), "masala dosa");
    }
}
