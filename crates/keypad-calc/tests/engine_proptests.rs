//! Property-based tests for the keypad engine
//!
//! Random key sequences catch the state combinations hand-written cases miss.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use keypad_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9u8).prop_map(|d| Digit::new(d).unwrap())
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Any button, weighted towards digits like real input
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => digit_strategy().prop_map(Key::Digit),
        1 => Just(Key::Decimal),
        2 => operation_strategy().prop_map(Key::Operator),
        1 => Just(Key::Equals),
        1 => Just(Key::Percent),
        1 => Just(Key::Delete),
        1 => Just(Key::Clear),
    ]
}

fn press_all(engine: &mut Engine, keys: &[Key]) {
    for &key in keys {
        // Errors reset the engine; the sequence keeps going like a user would.
        let _ = engine.press(key);
    }
}

// ===== Entry properties =====

proptest! {
    /// Fresh digit sequences display their concatenation without leading zeros
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..16)) {
        let mut engine = Engine::new();
        let mut display = String::new();
        for digit in &digits {
            display = engine.on_digit(*digit);
        }

        let typed: String = digits.iter().map(|d| d.as_char()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(display, expected);
    }

    /// The display never carries more than one decimal point
    #[test]
    fn prop_at_most_one_decimal_point(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut engine = Engine::new();
        for key in keys {
            let _ = engine.press(key);
            prop_assert!(engine.display().matches('.').count() <= 1, "{}", engine.display());
        }
    }

    /// Every reachable display parses as a finite number
    #[test]
    fn prop_display_always_parses(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut engine = Engine::new();
        for key in keys {
            let _ = engine.press(key);
            let value = parse_operand(engine.display());
            prop_assert!(value.is_ok(), "unparseable display {:?}", engine.display());
        }
    }

    /// Deleting as many characters as were typed always lands on "0"
    #[test]
    fn prop_delete_everything_yields_zero(digits in prop::collection::vec(digit_strategy(), 1..12)) {
        let mut engine = Engine::new();
        for digit in &digits {
            engine.on_digit(*digit);
        }
        let mut display = String::new();
        for _ in 0..digits.len() {
            display = engine.on_delete();
        }
        prop_assert_eq!(display, "0");
    }
}

// ===== Reset properties =====

proptest! {
    /// Clear returns to the initial state from anywhere
    #[test]
    fn prop_clear_restores_initial_state(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut engine = Engine::new();
        press_all(&mut engine, &keys);
        prop_assert_eq!(engine.reset(), "0");
        prop_assert_eq!(engine.state(), &EngineState::new());
    }

    /// Errors always leave the engine in the initial state
    #[test]
    fn prop_errors_reset(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut engine = Engine::new();
        for key in keys {
            if engine.press(key).is_err() {
                prop_assert_eq!(engine.state(), &EngineState::new());
            }
        }
    }

    /// Delete right after an operator clears all pending state
    #[test]
    fn prop_delete_after_operator_resets(
        keys in prop::collection::vec(key_strategy(), 0..20),
        op in operation_strategy(),
    ) {
        let mut engine = Engine::new();
        press_all(&mut engine, &keys);
        if engine.on_operator(op).is_ok() {
            prop_assert_eq!(engine.on_delete(), "0");
            prop_assert_eq!(engine.state(), &EngineState::new());
        }
    }
}

// ===== Arithmetic properties =====

proptest! {
    /// Integer arithmetic through the keypad matches native arithmetic
    #[test]
    fn prop_integer_arithmetic(a in 0u32..100_000, b in 0u32..100_000, op in operation_strategy()) {
        let keys = format!("{a}{}{b}=", op.symbol());
        let mut driver = EngineDriver::new();
        let outcome = driver.press_sequence(&keys);

        let (a, b) = (f64::from(a), f64::from(b));
        match op {
            Operation::Divide if b == 0.0 => {
                prop_assert_eq!(outcome, Err(DriverError::Calc(CalcError::DivideByZero)));
                prop_assert_eq!(driver.display(), "0");
            }
            _ => {
                prop_assert!(outcome.is_ok());
                let expected = format_number(op.apply(a, b).unwrap());
                prop_assert_eq!(driver.display(), expected);
            }
        }
    }

    /// Integral results never render with a fraction
    #[test]
    fn prop_integral_results_have_no_point(a in 0u32..10_000, b in 0u32..10_000) {
        let mut driver = EngineDriver::new();
        driver.press_sequence(&format!("{a}*{b}=")).unwrap();
        prop_assert!(!driver.display().contains('.'));
        prop_assert_eq!(driver.display(), (u64::from(a) * u64::from(b)).to_string());
    }

    /// Repeated equals doubles an addition result each time
    #[test]
    fn prop_repeated_equals_reapplies(a in 0u32..1000, b in 0u32..1000, presses in 1usize..5) {
        let mut driver = EngineDriver::new();
        driver.press_sequence(&format!("{a}+{b}=")).unwrap();
        let mut expected = u64::from(a) + u64::from(b);
        for _ in 0..presses {
            driver.press(Key::Equals).unwrap();
            expected *= 2;
        }
        prop_assert_eq!(driver.display(), expected.to_string());
    }

    /// A number and operator typed after `=` start over instead of chaining
    #[test]
    fn prop_operator_after_equals_starts_new_calculation(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 1u32..1000,
        d in 0u32..1000,
        first in operation_strategy(),
        second in operation_strategy(),
    ) {
        let mut driver = EngineDriver::new();
        driver.press_sequence(&format!("{a}{}{b}=", first.symbol())).unwrap_or_default();
        let outcome = driver.press_sequence(&format!("{c}{}{d}=", second.symbol()));

        match second.apply(f64::from(c), f64::from(d)) {
            Ok(value) => {
                prop_assert!(outcome.is_ok());
                prop_assert_eq!(driver.display(), format_number(value));
                prop_assert_eq!(driver.engine().state().pending_operation(), None);
            }
            Err(err) => {
                prop_assert_eq!(outcome, Err(DriverError::Calc(err)));
            }
        }
    }

    /// The engine wrapper and the pure transition agree
    #[test]
    fn prop_engine_matches_pure_transition(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut engine = Engine::new();
        let mut state = EngineState::new();
        for key in keys {
            let wrapped = engine.press(key);
            let (next, pure) = state.apply(key);
            state = next;
            prop_assert_eq!(wrapped, pure);
            prop_assert_eq!(engine.state(), &state);
        }
    }
}
