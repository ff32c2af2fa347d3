//! Formatting for the two-line calculator readout.
//!
//! Everything here is pure: nothing mutates engine state. The lower
//! line shows the formatted entry buffer; the upper line shows the
//! expression in progress, or the last evaluated expression with a
//! trailing `=`.

use serde::{Deserialize, Serialize};

use crate::core::CalculatorState;

/// The two readout lines, written verbatim into the display regions
/// after every press.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPair {
    /// Expression line shown above the entry.
    pub upper: String,
    /// The entry or result line.
    pub lower: String,
}

/// Format an entry buffer for display.
///
/// The integer part is grouped in threes with commas; any fractional
/// text after the decimal point is reappended verbatim, so a bare
/// trailing point survives (`"12."` stays `"12."`) and long float tails
/// are neither grouped nor rounded. An unparseable integer part renders
/// as empty, which makes the empty entry format as the empty string.
///
/// # Example
///
/// ```rust
/// use tenkey::format_entry;
///
/// assert_eq!(format_entry("1234.5"), "1,234.5");
/// assert_eq!(format_entry("12."), "12.");
/// assert_eq!(format_entry(""), "");
/// ```
pub fn format_entry(value: &str) -> String {
    let (int_part, frac_part) = match value.find('.') {
        Some(idx) => (&value[..idx], Some(&value[idx + 1..])),
        None => (value, None),
    };

    let formatted_int = match int_part.parse::<f64>() {
        Ok(v) if v.is_finite() => group_thousands(&v.trunc().to_string()),
        // inf / NaN results pass through ungrouped
        Ok(_) => int_part.to_string(),
        Err(_) => String::new(),
    };

    match frac_part {
        Some(frac) => format!("{formatted_int}.{frac}"),
        None => formatted_int,
    }
}

/// Group an integer string's digits in threes with commas. Sign-aware.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }

    let grouped: String = reversed.chars().rev().collect();
    format!("{sign}{grouped}")
}

/// Derive both readout lines from the session state.
///
/// Upper line precedence: a freshly evaluated expression renders as
/// `"A op B ="`; otherwise a pending operation renders live as
/// `"A op"` or `"A op B"`; otherwise the line is empty.
pub fn rendered_displays(state: &CalculatorState) -> DisplayPair {
    let lower = format_entry(&state.current_value);

    let upper = if state.just_evaluated && !state.last_expression.is_empty() {
        format!("{} =", state.last_expression)
    } else if let Some(op) = state.pending_operation {
        if state.current_value.is_empty() {
            format!("{} {}", format_entry(&state.previous_value), op.symbol())
        } else {
            format!(
                "{} {} {}",
                format_entry(&state.previous_value),
                op.symbol(),
                format_entry(&state.current_value),
            )
        }
    } else {
        String::new()
    };

    DisplayPair { upper, lower }
}
