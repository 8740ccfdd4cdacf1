//! Number and currency formatting for display.
//!
//! Uses Brazilian Portuguese conventions: `.` groups thousands and `,`
//! separates decimals, e.g. `1.234,56`.

use crate::calculator::round_to;

/// Format a number with a fixed number of decimals and grouped thousands.
pub fn format_number(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as i32);
    let fixed = format!("{:.*}", decimals, rounded.abs());

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    // -0.0 compares equal to 0.0, so it never gets a sign
    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Kilograms of CO₂, e.g. `"38,27 kg"`.
pub fn format_kg(value: f64) -> String {
    format!("{} kg", format_number(value, 2))
}

/// Currency amount, e.g. `"R$ 1.234,56"`.
///
/// Negative amounts put the sign before the symbol: `"-R$ 5,00"`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let formatted = format_number(value, 2);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-{symbol} {abs}"),
        None => format!("{symbol} {formatted}"),
    }
}

/// Percentage with two decimals, e.g. `"74,17%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_number(value, 2))
}

/// Insert `.` between groups of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
