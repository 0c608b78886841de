//! # Result Formatter
//!
//! Renders an evaluated `f64` for the result display. Numbers print in their
//! shortest round-trip form while that form has at most
//! [`MAX_PLAIN_DIGITS`] digits; longer ones, and magnitudes whose shortest
//! form would be exponential, switch to exponential notation with
//! [`EXPONENT_FRACTION_DIGITS`] fractional digits and an explicit exponent
//! sign (`1.234567890123457e+16`).
use smartstring::alias::String;

/// Result text shown for any failure.
pub const ERROR_TEXT: &str = "Error";

/// Longest plain rendering, counted in digit characters.
pub const MAX_PLAIN_DIGITS: usize = 16;

/// Fractional digits of the exponential form.
pub const EXPONENT_FRACTION_DIGITS: usize = 15;

/// Magnitudes at or above this are shown in exponential form.
const EXPONENTIAL_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this are shown in exponential form.
const EXPONENTIAL_LOWER: f64 = 1e-6;

/// Formats a result for display.
///
/// # Example
/// ```rust
/// # use calcpad::format_result;
/// assert_eq!(format_result(250.0).as_str(), "250");
/// assert_eq!(format_result(0.1).as_str(), "0.1");
/// assert_eq!(format_result(f64::INFINITY).as_str(), "Error");
/// assert_eq!(format_result(1e21).as_str(), "1.000000000000000e+21");
/// ```
pub fn format_result(n: f64) -> String {
    if !n.is_finite() {
        return String::from(ERROR_TEXT);
    }
    if n == 0.0 {
        return String::from("0");
    }
    let magnitude = n.abs();
    if magnitude >= EXPONENTIAL_UPPER || magnitude < EXPONENTIAL_LOWER {
        return to_exponential(n);
    }

    let plain = n.to_string();
    let plain = if plain.contains('.') {
        plain.trim_end_matches('0').trim_end_matches('.')
    } else {
        plain.as_str()
    };

    let digits = plain.chars().filter(char::is_ascii_digit).count();
    if digits <= MAX_PLAIN_DIGITS {
        String::from(plain)
    } else {
        to_exponential(n)
    }
}

/// Exponential notation with [`EXPONENT_FRACTION_DIGITS`] fractional digits
/// and a signed exponent.
pub fn to_exponential(n: f64) -> String {
    let raw = format!("{:.*e}", EXPONENT_FRACTION_DIGITS, n);
    let mut out = String::new();
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            out.push_str(mantissa);
            out.push('e');
            if !exp.starts_with('-') {
                out.push('+');
            }
            out.push_str(exp);
        }
        None => out.push_str(&raw),
    }
    out
}
