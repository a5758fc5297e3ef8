//! Basic example: Driving the calculator the way a front end would
//!
//! This example demonstrates:
//! - Pressing buttons by label
//! - Reading the display and the history line
//! - Left-to-right chaining and error recovery
//!
//! Run with `RUST_LOG=tricalc=debug` to see engine events.

use tracing_subscriber::EnvFilter;
use tricalc::*;

fn show(calc: &ModeController) {
    println!(
        "  display: {:>16}    history: {}",
        calc.current_display_text(),
        calc.current_history_text()
    );
}

fn press_all(calc: &mut ModeController, labels: &[&str]) {
    for label in labels {
        if let Err(err) = calc.press(label) {
            println!("  ({label} -> {err:?})");
        }
    }
    show(calc);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut calc = ModeController::new();

    println!("Layout for {}:", calc.mode());
    for row in calc.current_layout() {
        println!("  {}", row.join("  "));
    }

    println!("\n3 + 4 × 2 = (left to right)");
    press_all(&mut calc, &["3", "+", "4", "×", "2", "="]);

    println!("\n0.1 + 0.2 =");
    press_all(&mut calc, &[".", "1", "+", ".", "2", "="]);

    println!("\n5 ÷ 0 =");
    press_all(&mut calc, &["5", "÷", "0", "="]);

    println!("\nNext digit recovers:");
    press_all(&mut calc, &["9", "√"]);

    println!("\nSession history:");
    for entry in calc.history().iter() {
        println!("  {entry}");
    }
}
