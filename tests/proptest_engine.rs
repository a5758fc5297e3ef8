//! Property-based tests for the calculator engine.
//!
//! These tests verify that:
//! - digit entry reproduces the keys pressed
//! - clear always returns to the same state, whatever came before
//! - formatting is stable under format → parse → format
//! - the display never ends up empty or holding NaN/infinity

use proptest::prelude::*;

use tricalc::format::format_number;
use tricalc::operator::layout;
use tricalc::*;

static ENTRY_KEYS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

fn every_label() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Mode::ALL
        .iter()
        .flat_map(|mode| layout(*mode).iter().flat_map(|row| row.iter().copied()))
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// What the display should read after typing `keys` from a fresh start.
fn literal_entry(keys: &[char]) -> String {
    let mut expected = String::new();
    for &key in keys {
        if expected.is_empty() {
            expected = if key == '.' { "0.".into() } else { key.to_string() };
        } else if key != '.' || !expected.contains('.') {
            expected.push(key);
        }
    }
    expected
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn digit_entry_matches_keys(keys in prop::collection::vec(prop::sample::select(ENTRY_KEYS.to_vec()), 1..24)) {
        let mut engine = CalculatorEngine::new();
        for key in &keys {
            engine.input_digit(*key).unwrap();
        }

        let display = engine.display();
        prop_assert_eq!(display, literal_entry(&keys));
        prop_assert!(display.matches('.').count() <= 1);
    }

    #[test]
    fn clear_is_idempotent(labels in prop::collection::vec(prop::sample::select(every_label()), 0..40)) {
        let mut calc = ModeController::new();
        for label in &labels {
            let _ = calc.press(label);
        }

        calc.clear();
        let once = calc.engine().state().clone();
        calc.clear();

        prop_assert_eq!(calc.engine().state(), &once);
        prop_assert_eq!(calc.current_display_text(), "0");
        prop_assert_eq!(calc.engine().pending(), None);
    }

    #[test]
    fn display_is_never_empty_or_non_finite(
        mode in prop::sample::select(Mode::ALL.to_vec()),
        labels in prop::collection::vec(prop::sample::select(every_label()), 0..60),
    ) {
        let mut calc = ModeController::new();
        calc.set_mode(mode);
        for label in &labels {
            let _ = calc.press(label);

            let display = calc.current_display_text();
            prop_assert!(!display.is_empty());
            prop_assert!(!display.contains("NaN"));
            prop_assert!(!display.contains("inf"));
            if calc.engine().state().errored {
                prop_assert!(calc.engine().is_awaiting_new_entry());
                prop_assert_eq!(calc.engine().pending(), None);
            }
        }
    }

    #[test]
    fn formatting_is_idempotent(value in -1.0e9f64..1.0e9f64) {
        let once = format_number(value);
        let reparsed: f64 = once.parse().unwrap();
        prop_assert_eq!(format_number(reparsed), once.clone());

        if let Some((_, fraction)) = once.split_once('.') {
            prop_assert!(fraction.len() <= 10);
            prop_assert!(!fraction.ends_with('0'));
        }
    }

    #[test]
    fn short_fractions_print_as_typed(whole in 0u64..100_000_000_000, fraction in 1u32..10_000) {
        let fraction = fraction.to_string();
        prop_assume!(!fraction.ends_with('0'));
        let typed = format!("{whole}.{fraction}");
        let value: f64 = typed.parse().unwrap();
        prop_assert_eq!(format_number(value), typed.clone());
        prop_assert_eq!(format_number(-value), format!("-{typed}"));
    }

    #[test]
    fn bitwise_results_are_integers(a in -30_000i32..30_000, b in -30_000i32..30_000, op in prop::sample::select(vec!["AND", "OR", "XOR"])) {
        let mut engine = CalculatorEngine::new();
        engine.reset_for(Mode::Programmer);

        let lhs = a.unsigned_abs().to_string();
        for c in lhs.chars() {
            engine.input_digit(c).unwrap();
        }
        if a < 0 {
            engine.input_operator("±").unwrap();
        }
        engine.input_operator(op).unwrap();
        for c in b.unsigned_abs().to_string().chars() {
            engine.input_digit(c).unwrap();
        }
        if b < 0 {
            engine.input_operator("±").unwrap();
        }
        engine.equals().unwrap();

        let expected = match op {
            "AND" => a & b,
            "OR" => a | b,
            _ => a ^ b,
        };
        prop_assert_eq!(engine.display(), expected.to_string());
    }
}
