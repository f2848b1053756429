//! Display formatting for conversion results

/// Shown for any non-finite result
pub const INFINITY_SYMBOL: &str = "∞";

/// Below this magnitude (and nonzero) results switch to scientific notation
const SMALL_THRESHOLD: f64 = 1e-6;
/// Above this magnitude results switch to scientific notation
const LARGE_THRESHOLD: f64 = 1e9;
/// Mantissa digits after the decimal point in scientific notation
const EXPONENT_DIGITS: usize = 6;
/// Significant digits kept in plain notation
const SIGNIFICANT_DIGITS: usize = 8;

/// Render a conversion result for display.
///
/// - non-finite -> `"∞"`
/// - `0 < |v| < 1e-6` or `|v| > 1e9` -> `"1.234568e+12"` style
/// - otherwise up to 8 significant digits, trailing zeros dropped (`3.0` -> `"3"`)
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return INFINITY_SYMBOL.to_string();
    }

    let magnitude = value.abs();
    if (magnitude < SMALL_THRESHOLD && value != 0.0) || magnitude > LARGE_THRESHOLD {
        return to_exponential(value, EXPONENT_DIGITS);
    }

    to_significant(value, SIGNIFICANT_DIGITS)
}

/// Scientific notation with an explicitly signed exponent ("e+9", "e-7")
fn to_exponential(value: f64, digits: usize) -> String {
    let raw = format!("{:.prec$e}", value, prec = digits);
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => raw,
    }
}

/// Round to `sigfigs` significant digits, then print the shortest
/// plain-decimal form of the rounded value.
fn to_significant(value: f64, sigfigs: usize) -> String {
    let rounded = format!("{:.prec$e}", value, prec = sigfigs.max(1) - 1)
        .parse::<f64>()
        .unwrap_or(value);

    if rounded == 0.0 {
        // also folds -0 into "0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
