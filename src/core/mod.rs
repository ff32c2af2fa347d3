//! Core calculator types and transition logic.
//!
//! This module contains the engine itself and the values it operates on:
//! - Typed keypad input via the `Key` and `Operator` enums
//! - The session state entity and its derived `Phase`
//! - The `CalculatorEngine` that applies every transition
//!
//! All transitions are synchronous and total; invalid input is handled
//! by silent no-op policies rather than errors.

mod engine;
mod key;
mod state;

pub use engine::CalculatorEngine;
pub use key::{Key, KeyParseError, Operator};
pub use state::{CalculatorState, Phase, MAX_SIGNIFICANT_DIGITS};
