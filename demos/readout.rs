//! Readout
//!
//! An interactive driver: reads keypad labels from stdin, one per line
//! (digits, ".", "+", "-", "×", "÷", "=", "%", "DEL", "AC"), and prints
//! the two-line readout after every press. ASCII operator spellings
//! ("*", "/", "x") work too.
//!
//! Run with: cargo run --example readout

use std::io::{self, BufRead};

use tenkey::{CalculatorEngine, Key};

fn main() -> io::Result<()> {
    println!("enter keypad labels, one per line (Ctrl-D to quit)");

    let mut calc = CalculatorEngine::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        match Key::from_label(line.trim()) {
            Ok(key) => {
                calc.press(key);
                let lines = calc.displays();
                println!("  ┌ {}", lines.upper);
                println!("  └ {}", lines.lower);
            }
            Err(err) => println!("  ! {err}"),
        }
    }

    Ok(())
}
