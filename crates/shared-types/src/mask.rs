//! Live input masks applied on every keystroke.
//!
//! Masks never reject input outright: they reshape whatever the user typed
//! into the canonical display text for the field.

use crate::time::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS, TIME_LIMIT_MESSAGE};

/// Number of digits in a full `HH:MM:SS` value.
const TIME_DIGITS: usize = 6;

/// Reformat raw preparation-time input as `HH:MM:SS`.
///
/// Non-digits are dropped, the digits are truncated to six, and a colon is
/// inserted before the third and fifth digit. Partial input stays partial:
/// `"123"` becomes `"12:3"`.
pub fn format_preparation_time(raw: &str) -> String {
    let mut out = String::with_capacity(TIME_DIGITS + 2);
    for (i, c) in raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(TIME_DIGITS)
        .enumerate()
    {
        if i == 2 || i == 4 {
            out.push(':');
        }
        out.push(c);
    }
    out
}

/// Range-check the complete components of a masked preparation time.
///
/// Returns the inline error message when the hours exceed 23 or the minutes
/// or seconds exceed 59. Incomplete components are not judged yet.
pub fn check_preparation_time(masked: &str) -> Option<&'static str> {
    let limits = [MAX_HOURS, MAX_MINUTES, MAX_SECONDS];
    let over = masked
        .split(':')
        .zip(limits)
        .filter(|(part, _)| part.len() == 2)
        .any(|(part, limit)| part.parse::<u8>().map(|v| v > limit).unwrap_or(false));
    over.then_some(TIME_LIMIT_MESSAGE)
}

/// Reformat raw diameter input into a decimal number as digits accumulate.
///
/// Keeps digits and the first decimal point only, then inserts a point after
/// each run of two digits that is directly followed by another digit, so
/// `"305"` becomes `"30.5"`.
pub fn format_diameter(raw: &str) -> String {
    let mut seen_point = false;
    let kept: Vec<char> = raw
        .chars()
        .filter(|&c| {
            if c.is_ascii_digit() {
                true
            } else if c == '.' && !seen_point {
                seen_point = true;
                true
            } else {
                false
            }
        })
        .collect();

    let mut out = String::with_capacity(kept.len() + kept.len() / 2);
    let mut i = 0;
    while i < kept.len() {
        let run = kept[i..].iter().take(3).filter(|c| c.is_ascii_digit()).count();
        if run == 3 {
            out.push(kept[i]);
            out.push(kept[i + 1]);
            out.push('.');
            i += 2;
        } else {
            out.push(kept[i]);
            i += 1;
        }
    }
    out
}

/// Whether a keypress should reach a number input.
///
/// Only single ASCII digits pass; the caller decides about non-character keys.
pub fn is_digit_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}
