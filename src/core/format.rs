//! Display formatting: thousands grouping and numeral/number conversion.
//!
//! Grouping is a display-only transform. The grouped string is never fed
//! back into arithmetic; every parse strips the separators first, so
//! format → strip → parse is lossless.

use crate::core::state::ERROR_TEXT;
use crate::core::{CalcError, CalcResult};

/// Inserts a comma every three digits of the integer part.
///
/// `"0"` and the error sentinel pass through unchanged. The sign and the
/// fractional part (including a trailing decimal point mid-entry) are
/// left untouched.
#[must_use]
pub fn group_thousands(text: &str) -> String {
    if text == "0" || text == ERROR_TEXT {
        return text.to_string();
    }

    let (sign, unsigned) = text
        .strip_prefix('-')
        .map_or(("", text), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Removes grouping separators.
#[must_use]
pub fn strip_separators(text: &str) -> String {
    text.replace(',', "")
}

/// Parses a (possibly grouped) decimal numeral.
pub fn parse_numeral(text: &str) -> CalcResult<f64> {
    strip_separators(text)
        .parse::<f64>()
        .map_err(|_| CalcError::BadNumeral(text.to_string()))
}

/// Renders a number as display text.
///
/// Integers render without a decimal point; fractional values are
/// printed to ten places and trailing zeros trimmed.
#[must_use]
pub fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.10}");
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}
