//! Engineering units and SI prefix handling.

/// Split a raw value into its numeric body and SI multiplier.
///
/// Recognized suffixes (case-insensitive): MEG (1e6), T (1e12), G (1e9),
/// K (1e3), M (1e-3), U (1e-6), N (1e-9), P (1e-12). MEG is tested before
/// the single-character suffixes so that `1meg` never reads as milli.
/// Text without a recognized suffix comes back with multiplier 1.
pub fn split_suffix(s: &str) -> (&str, f64) {
    if s.len() > 3 && s.is_char_boundary(s.len() - 3) {
        let (body, tail) = s.split_at(s.len() - 3);
        if tail.eq_ignore_ascii_case("meg") {
            return (body, 1e6);
        }
    }
    if let Some(last) = s.chars().last()
        && last.is_ascii_alphabetic()
    {
        let multiplier = match last.to_ascii_lowercase() {
            't' => 1e12,
            'g' => 1e9,
            'k' => 1e3,
            'm' => 1e-3,
            'u' => 1e-6,
            'n' => 1e-9,
            'p' => 1e-12,
            _ => return (s, 1.0),
        };
        return (&s[..s.len() - 1], multiplier);
    }
    (s, 1.0)
}

/// Parse a SPICE-style numeric literal with optional SI suffix.
///
/// Returns `None` when the text is not a finite number, including
/// unrecognized suffixes (`10pf`) and bare words.
pub fn parse_spice_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Plain number, possibly in scientific notation
    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }

    let (body, multiplier) = split_suffix(s);
    let value: f64 = body.parse().ok()?;
    let scaled = value * multiplier;
    scaled.is_finite().then_some(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|v| (v - b).abs() < b.abs() * 1e-12 + 1e-30)
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_spice_number("1.5"), Some(1.5));
        assert_eq!(parse_spice_number("-2.5"), Some(-2.5));
        assert_eq!(parse_spice_number("1e-3"), Some(1e-3));
        assert_eq!(parse_spice_number("1.4e-8"), Some(1.4e-8));
    }

    #[test]
    fn test_parse_with_suffix() {
        assert!(approx_eq(parse_spice_number("1k"), 1e3));
        assert!(approx_eq(parse_spice_number("4.7K"), 4.7e3));
        assert!(approx_eq(parse_spice_number("0.18u"), 0.18e-6));
        assert!(approx_eq(parse_spice_number("100n"), 100e-9));
        assert!(approx_eq(parse_spice_number("10p"), 10e-12));
        assert!(approx_eq(parse_spice_number("2t"), 2e12));
        assert!(approx_eq(parse_spice_number("3g"), 3e9));
    }

    #[test]
    fn test_meg_takes_precedence_over_milli() {
        assert!(approx_eq(parse_spice_number("1meg"), 1e6));
        assert!(approx_eq(parse_spice_number("1MEG"), 1e6));
        assert!(approx_eq(parse_spice_number("1m"), 1e-3));
        assert!(approx_eq(parse_spice_number("1M"), 1e-3));
    }

    #[test]
    fn test_signed_with_suffix() {
        assert!(approx_eq(parse_spice_number("-0.7"), -0.7));
        assert!(parse_spice_number("-2u").is_some_and(|v| (v + 2e-6).abs() < 1e-18));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_spice_number("abc"), None);
        assert_eq!(parse_spice_number(""), None);
        assert_eq!(parse_spice_number("10pf"), None);
        assert_eq!(parse_spice_number("meg"), None);
        assert_eq!(parse_spice_number("1x"), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_spice_number("inf"), None);
        assert_eq!(parse_spice_number("nan"), None);
        assert_eq!(parse_spice_number("1e400"), None);
    }
}
