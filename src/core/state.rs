//! Calculator session state.
//!
//! [`CalculatorState`] is the single entity the engine owns. It is
//! created once in a fully cleared configuration and mutated in place by
//! every input; a reset returns it to the initial configuration rather
//! than replacing the instance.

use serde::{Deserialize, Serialize};

use super::key::Operator;

/// Maximum number of digit characters allowed in the entry buffer.
///
/// Only digit characters count toward the cap; the decimal point and a
/// leading minus sign are excluded.
pub const MAX_SIGNIFICANT_DIGITS: usize = 12;

/// The four logical states of the calculator engine.
///
/// The phase is derived from [`CalculatorState`] rather than stored, so
/// it can never drift out of sync with the fields it summarizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing typed, no operation pending.
    Empty,
    /// Digits are being typed into the entry buffer.
    Entering,
    /// An operation was chosen and the right operand has not started.
    OperatorPending,
    /// A result is showing, immediately after an equals computation.
    Evaluated,
}

impl Phase {
    /// Get the phase's name for display/diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Entering => "Entering",
            Self::OperatorPending => "OperatorPending",
            Self::Evaluated => "Evaluated",
        }
    }
}

/// Complete session state of a calculator engine.
///
/// Operand values are held as entry strings (digits, at most one `.`,
/// an optional leading `-`) and parsed as floats only at evaluation
/// time, so partially typed entries like `"12."` survive verbatim.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Value currently being typed, or the last computed result.
    pub current_value: String,
    /// Left operand stored when an operation is chosen.
    pub previous_value: String,
    /// Operator awaiting a right operand.
    pub pending_operation: Option<Operator>,
    /// True immediately after an equals computation, until the next
    /// digit, operator, or percent input clears it.
    pub just_evaluated: bool,
    /// Human-readable "A op B" snapshot captured at evaluation time,
    /// redisplayed with a trailing "=".
    pub last_expression: String,
}

impl CalculatorState {
    /// Derive which of the four logical states this state is in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenkey::{CalculatorState, Phase};
    ///
    /// let state = CalculatorState::default();
    /// assert_eq!(state.phase(), Phase::Empty);
    /// assert_eq!(state.phase().name(), "Empty");
    /// ```
    pub fn phase(&self) -> Phase {
        if self.just_evaluated {
            Phase::Evaluated
        } else if !self.current_value.is_empty() {
            Phase::Entering
        } else if self.pending_operation.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Empty
        }
    }

    /// Number of digit characters in the entry buffer.
    ///
    /// The decimal point and a leading minus sign do not count, matching
    /// how [`MAX_SIGNIFICANT_DIGITS`] is measured.
    pub fn digit_count(&self) -> usize {
        self.current_value
            .chars()
            .filter(char::is_ascii_digit)
            .count()
    }

    /// Return every field to the initial cleared configuration.
    pub(crate) fn clear(&mut self) {
        self.current_value.clear();
        self.previous_value.clear();
        self.pending_operation = None;
        self.clear_evaluation();
    }

    /// Reset the just-evaluated flag together with the captured
    /// expression text. The two always change together.
    pub(crate) fn clear_evaluation(&mut self) {
        self.just_evaluated = false;
        self.last_expression.clear();
    }
}
