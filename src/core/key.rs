//! Typed input surface for the calculator keypad.
//!
//! A view layer translates button presses into [`Key`] values and feeds
//! them to the engine one at a time. Labels are parsed exactly as they
//! appear on a keypad button, so glue code can pass trimmed button text
//! straight through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing keypad input from a view layer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unrecognized operator character: {0:?}")]
    UnknownOperator(char),

    #[error("unrecognized keypad label: {0:?}")]
    UnknownLabel(String),
}

/// One of the four arithmetic operations.
///
/// # Example
///
/// ```rust
/// use tenkey::Operator;
///
/// let op = Operator::try_from('×').unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.symbol(), "×");
/// assert_eq!(op.apply(2.0, 3.0), 6.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The display symbol for this operator, as it appears on the keypad
    /// and in the expression line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by zero follows IEEE 754 semantics and yields an
    /// infinite or NaN result rather than an error.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = KeyParseError;

    /// Accepts the display symbols plus the ASCII spellings `*`, `x`
    /// and `/` commonly produced by keyboard input.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '×' | 'x' | '*' => Ok(Self::Multiply),
            '÷' | '/' => Ok(Self::Divide),
            other => Err(KeyParseError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad press.
///
/// Every button on the keypad maps to exactly one variant, so a view
/// layer needs only one event type to drive the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Key {
    /// A digit button, `0` through `9`.
    Digit(u8),
    /// The decimal point button.
    Decimal,
    /// One of the four operator buttons.
    Operator(Operator),
    /// The equals button.
    Equals,
    /// The percent button.
    Percent,
    /// The backspace button: delete one entry character.
    Backspace,
    /// The clear-all button.
    ClearAll,
}

impl Key {
    /// Parse a keypad button label, as read (and trimmed) by the view
    /// layer from the button it captured the press on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenkey::{Key, Operator};
    ///
    /// assert_eq!(Key::from_label("7").unwrap(), Key::Digit(7));
    /// assert_eq!(Key::from_label("÷").unwrap(), Key::Operator(Operator::Divide));
    /// assert_eq!(Key::from_label("AC").unwrap(), Key::ClearAll);
    /// assert!(Key::from_label("sin").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self, KeyParseError> {
        match label {
            "." => return Ok(Self::Decimal),
            "=" => return Ok(Self::Equals),
            "%" => return Ok(Self::Percent),
            "DEL" | "⌫" => return Ok(Self::Backspace),
            "AC" | "C" => return Ok(Self::ClearAll),
            _ => {}
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if let Some(d) = c.to_digit(10) {
                    Ok(Self::Digit(d as u8))
                } else {
                    Operator::try_from(c)
                        .map(Self::Operator)
                        .map_err(|_| KeyParseError::UnknownLabel(label.to_string()))
                }
            }
            _ => Err(KeyParseError::UnknownLabel(label.to_string())),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_match_keypad() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn operator_applies_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), 10.0);
        assert_eq!(Operator::Divide.apply(9.0, 2.0), 4.5);
    }

    #[test]
    fn division_by_zero_follows_float_semantics() {
        assert!(Operator::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(-1.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn operator_parses_display_and_ascii_symbols() {
        assert_eq!(Operator::try_from('+').unwrap(), Operator::Add);
        assert_eq!(Operator::try_from('-').unwrap(), Operator::Subtract);
        assert_eq!(Operator::try_from('×').unwrap(), Operator::Multiply);
        assert_eq!(Operator::try_from('*').unwrap(), Operator::Multiply);
        assert_eq!(Operator::try_from('x').unwrap(), Operator::Multiply);
        assert_eq!(Operator::try_from('÷').unwrap(), Operator::Divide);
        assert_eq!(Operator::try_from('/').unwrap(), Operator::Divide);
    }

    #[test]
    fn operator_rejects_unknown_characters() {
        assert_eq!(
            Operator::try_from('^'),
            Err(KeyParseError::UnknownOperator('^'))
        );
    }

    #[test]
    fn key_parses_every_button_label() {
        for d in 0..=9u8 {
            let label = d.to_string();
            assert_eq!(Key::from_label(&label).unwrap(), Key::Digit(d));
        }
        assert_eq!(Key::from_label(".").unwrap(), Key::Decimal);
        assert_eq!(Key::from_label("=").unwrap(), Key::Equals);
        assert_eq!(Key::from_label("%").unwrap(), Key::Percent);
        assert_eq!(Key::from_label("DEL").unwrap(), Key::Backspace);
        assert_eq!(Key::from_label("AC").unwrap(), Key::ClearAll);
        assert_eq!(
            Key::from_label("÷").unwrap(),
            Key::Operator(Operator::Divide)
        );
    }

    #[test]
    fn key_rejects_unknown_labels() {
        assert_eq!(
            Key::from_label("sin"),
            Err(KeyParseError::UnknownLabel("sin".to_string()))
        );
        assert_eq!(
            Key::from_label(""),
            Err(KeyParseError::UnknownLabel(String::new()))
        );
        assert_eq!(
            Key::from_label("q"),
            Err(KeyParseError::UnknownLabel("q".to_string()))
        );
    }

    #[test]
    fn key_from_str_delegates_to_label_parsing() {
        let key: Key = "5".parse().unwrap();
        assert_eq!(key, Key::Digit(5));
        assert!("??".parse::<Key>().is_err());
    }

    #[test]
    fn key_serializes_correctly() {
        let key = Key::Operator(Operator::Multiply);
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
