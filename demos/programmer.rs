//! Programmer example: Bitwise operators and mode switching
//!
//! This example demonstrates:
//! - Loading an engine configuration from JSON
//! - Switching modes (which always resets the calculation)
//! - Bitwise operators on rounded 32-bit registers
//! - Replaying a recorded input script

use tracing_subscriber::EnvFilter;
use tricalc::*;

const CONFIG: &str = r#"{ "initial_mode": "programmer", "history_limit": 8 }"#;

const SCRIPT: &str = r#"[
    {"type": "digit", "value": "1"},
    {"type": "operator", "value": "<<"},
    {"type": "digit", "value": "3"},
    {"type": "digit", "value": "1"},
    {"type": "equals"},
    {"type": "operator", "value": "NOT"}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::from_json(CONFIG)?;
    let mut calc = ModeController::with_config(&config);
    println!("Started in {} mode ({}-bit registers)", calc.mode(), numeric::REGISTER_BITS);

    for labels in [["1", "2", "AND", "1", "0", "="], ["6", ".", "6", "XOR", "3", "="]] {
        for label in labels {
            calc.press(label)?;
        }
        println!("  {:<20} -> {}", calc.current_history_text(), calc.current_display_text());
    }

    println!("\nReplaying script:");
    let inputs: Vec<Input> = serde_json::from_str(SCRIPT)?;
    for input in &inputs {
        calc.handle(input)?;
    }
    println!("  {:<20} -> {}", calc.current_history_text(), calc.current_display_text());

    println!("\nSwitching to Standard drops the calculation:");
    calc.press("7")?;
    calc.press("AND")?;
    calc.set_mode(Mode::Standard);
    println!("  display is {:?}", calc.current_display_text());

    if let Err(err) = calc.press("AND") {
        println!("  AND in {} mode: {err:?}", calc.mode());
    }

    println!("\nSession history:");
    for entry in calc.history().iter() {
        println!("  {entry}");
    }
    Ok(())
}
