//! Keypad Session
//!
//! This example drives the calculator the way a keypad would.
//!
//! Key concepts:
//! - Chained operators evaluate left to right
//! - Scientific functions act on the display
//! - Listeners observe every change
//! - Sessions snapshot to JSON
//!
//! Run with: cargo run --example keypad_session

use quantum_calc::core::{Operator, ScientificFn};
use quantum_calc::engine::Calculator;
use quantum_calc::logging::init_logger;

fn press(calc: &mut Calculator, keys: &str) -> Result<(), Box<dyn std::error::Error>> {
    for key in keys.chars() {
        match key {
            '0'..='9' => calc.append_digit(key),
            '.' => calc.append_decimal_point(),
            '=' => calc.compute_result()?,
            _ => {
                let op = Operator::from_symbol(key).ok_or(format!("no key '{key}'"))?;
                calc.choose_operator(op)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(false)?;

    println!("=== Keypad Session ===\n");

    let mut calc = Calculator::new();
    calc.subscribe(|state| println!("  display: {}", state.display));

    println!("3 + 4 + 5 =");
    press(&mut calc, "3+4+5=")?;

    println!("\nsqrt, then x²");
    calc.scientific(ScientificFn::Sqrt)?;
    calc.scientific(ScientificFn::Square)?;

    println!("\n1.5 * 4 =");
    calc.clear();
    press(&mut calc, "1.5*4=")?;

    println!("\nHistory (newest first):");
    for entry in calc.history().newest_first() {
        println!("  {entry}");
    }

    println!("\nSnapshot:");
    println!("{}", calc.snapshot().to_json()?);

    Ok(())
}
