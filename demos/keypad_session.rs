//! Keypad Session
//!
//! Drives the calculator engine through a scripted sequence of button
//! presses and prints the two-line readout after each one.
//!
//! Key concepts:
//! - One `Key` value per button press
//! - Left-to-right chained evaluation, no operator precedence
//! - Percent reinterprets the entry relative to the stored operand
//!
//! Run with: cargo run --example keypad_session

use tenkey::{CalculatorEngine, Key};

fn main() {
    println!("=== Keypad Session ===\n");

    let mut calc = CalculatorEngine::new();

    // 2 + 3 × 4 = → 20, then AC, then 200 + 50 % = → 300
    let labels = [
        "2", "+", "3", "×", "4", "=", "AC", "2", "0", "0", "+", "5", "0", "%", "=",
    ];

    for label in labels {
        let key = Key::from_label(label).expect("script uses valid labels");
        calc.press(key);
        let lines = calc.displays();
        println!("[{label:>3}]  {:>16} | {}", lines.upper, lines.lower);
    }

    println!("\nfinal phase: {}", calc.state().phase().name());
    println!("\n=== Session Complete ===");
}
