//! The calculator engine: every keypad input as a state transition.
//!
//! All transitions run synchronously to completion and are total:
//! invalid or premature input is a deliberate no-op, never an error.
//! The engine owns its [`CalculatorState`] exclusively; the only
//! mutation paths are the input methods below.

use serde::{Deserialize, Serialize};

use crate::core::key::{Key, Operator};
use crate::core::state::{CalculatorState, MAX_SIGNIFICANT_DIGITS};
use crate::display::{format_entry, rendered_displays, DisplayPair};

/// A four-function calculator engine.
///
/// The engine consumes discrete keypad inputs (digits, operators,
/// equals, percent, backspace, clear-all) and derives a two-line
/// readout after every press. Chained operations evaluate left to
/// right with no operator precedence.
///
/// # Example
///
/// ```rust
/// use tenkey::{CalculatorEngine, Key, Operator};
///
/// let mut calc = CalculatorEngine::new();
/// calc.press(Key::Digit(2));
/// calc.press(Key::Operator(Operator::Add));
/// calc.press(Key::Digit(3));
/// calc.press(Key::Equals);
///
/// let lines = calc.displays();
/// assert_eq!(lines.upper, "2 + 3 =");
/// assert_eq!(lines.lower, "5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Create an engine in the fully cleared configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Dispatch a single keypad press to the matching input method.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => {
                // out-of-range digits from hand-built keys are ignored
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.input_digit(c);
                }
            }
            Key::Decimal => self.input_digit('.'),
            Key::Operator(op) => self.choose_operation(op),
            Key::Equals => self.evaluate(),
            Key::Percent => self.apply_percent(),
            Key::Backspace => self.backspace(),
            Key::ClearAll => self.reset(),
        }
    }

    /// Clear everything back to the initial configuration.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Append a digit or the decimal point to the entry buffer.
    ///
    /// The first digit after an equals computation starts a brand-new
    /// entry instead of appending to the stale result. A second decimal
    /// point is rejected, as is any digit past the significant-digit
    /// cap. Characters other than `0`-`9` and `.` are ignored.
    pub fn input_digit(&mut self, d: char) {
        if d != '.' && !d.is_ascii_digit() {
            return;
        }
        if self.state.just_evaluated {
            self.state.clear();
        }
        if d == '.' && self.state.current_value.contains('.') {
            return;
        }
        if d != '.' && self.state.digit_count() >= MAX_SIGNIFICANT_DIGITS {
            return;
        }
        self.state.current_value.push(d);
    }

    /// Choose the operation to apply.
    ///
    /// Ignored while the entry buffer is empty. If an operation is
    /// already pending its result is computed first, which yields
    /// left-to-right chained evaluation with no operator precedence:
    /// `2 + 3 × 4` evaluates as `(2 + 3) × 4 = 20`.
    pub fn choose_operation(&mut self, op: Operator) {
        if self.state.current_value.is_empty() {
            return;
        }
        if !self.state.previous_value.is_empty() {
            self.evaluate();
        }
        self.state.pending_operation = Some(op);
        self.state.previous_value = std::mem::take(&mut self.state.current_value);
        self.state.clear_evaluation();
    }

    /// Collapse the pending operation into a single value.
    ///
    /// A no-op when no operation is pending, or when either operand
    /// fails to parse (an operator was chosen but no second operand was
    /// ever typed). Division by zero surfaces as an infinite or NaN
    /// value, not an error.
    pub fn evaluate(&mut self) {
        let Some(op) = self.state.pending_operation else {
            return;
        };
        let (Ok(left), Ok(right)) = (
            self.state.previous_value.parse::<f64>(),
            self.state.current_value.parse::<f64>(),
        ) else {
            return;
        };

        // capture "A op B" before the operands are consumed
        self.state.last_expression = format!(
            "{} {} {}",
            format_entry(&self.state.previous_value),
            op.symbol(),
            format_entry(&self.state.current_value),
        );

        self.state.current_value = op.apply(left, right).to_string();
        self.state.previous_value.clear();
        self.state.pending_operation = None;
        self.state.just_evaluated = true;
    }

    /// Remove the last character of the entry buffer. No-op when empty.
    pub fn backspace(&mut self) {
        self.state.current_value.pop();
    }

    /// Reinterpret the entry buffer as a percentage.
    ///
    /// With an operation pending, the entry becomes a percentage of the
    /// stored left operand: `200 + 50 %` turns the entry into `100`,
    /// modeling "50% of 200". With nothing pending the entry is divided
    /// by 100. An empty entry is treated as `0`; a no-op when there is
    /// nothing at all to act on or the entry does not parse.
    pub fn apply_percent(&mut self) {
        if self.state.current_value.is_empty() && self.state.previous_value.is_empty() {
            return;
        }
        let entry = if self.state.current_value.is_empty() {
            "0"
        } else {
            self.state.current_value.as_str()
        };
        let Ok(current) = entry.parse::<f64>() else {
            return;
        };

        if self.state.pending_operation.is_some() && !self.state.previous_value.is_empty() {
            if let Ok(base) = self.state.previous_value.parse::<f64>() {
                self.state.current_value = (base * current / 100.0).to_string();
            }
        } else {
            self.state.current_value = (current / 100.0).to_string();
        }
        self.state.clear_evaluation();
    }

    /// Render the two readout lines for the current state.
    pub fn displays(&self) -> DisplayPair {
        rendered_displays(&self.state)
    }
}
