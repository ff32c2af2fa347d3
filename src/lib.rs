//! Tenkey: a four-function calculator engine.
//!
//! Tenkey models a pocket calculator as a small, synchronous state
//! machine. The engine consumes discrete keypad inputs (digits, the
//! decimal point, operators, equals, percent, backspace, clear-all)
//! and derives a two-line readout after every press. It performs no
//! I/O of its own: a surrounding view layer feeds it [`Key`] values and
//! writes the resulting [`DisplayPair`] into its display regions.
//!
//! # Core Concepts
//!
//! - **Engine**: [`CalculatorEngine`] owns the session state and applies
//!   every transition in place
//! - **Keys**: type-safe keypad input via the [`Key`] and [`Operator`]
//!   enums, with label parsing for view glue
//! - **Phases**: the derived [`Phase`] names which of the four logical
//!   states the engine is in
//! - **Displays**: pure formatting into the expression line and entry
//!   line of the readout
//!
//! Chained operations evaluate left to right with no operator
//! precedence, and invalid or premature input is a deliberate no-op,
//! never an error.
//!
//! # Example
//!
//! ```rust
//! use tenkey::{CalculatorEngine, Key, Operator};
//!
//! let mut calc = CalculatorEngine::new();
//! for key in [
//!     Key::Digit(2),
//!     Key::Operator(Operator::Add),
//!     Key::Digit(3),
//!     Key::Operator(Operator::Multiply),
//!     Key::Digit(4),
//!     Key::Equals,
//! ] {
//!     calc.press(key);
//! }
//!
//! // left-to-right chaining: (2 + 3) × 4
//! let lines = calc.displays();
//! assert_eq!(lines.upper, "5 × 4 =");
//! assert_eq!(lines.lower, "20");
//! ```

pub mod core;
pub mod display;

// Re-export commonly used types
pub use core::{
    CalculatorEngine, CalculatorState, Key, KeyParseError, Operator, Phase, MAX_SIGNIFICANT_DIGITS,
};
pub use display::{format_entry, rendered_displays, DisplayPair};
