//! Unified calculator driver
//!
//! A UI collaborator does three things with the engine: forward a button
//! press, re-read the display, and show a transient notification when the
//! engine reports an error. [`CalculatorDriver`] captures that contract so
//! the same verification routines run against any front end.

use crate::core::{CalcError, CalcResult, Engine};
use crate::keys::{parse_sequence, Key, KeyError};
use thiserror::Error;
use tracing::info;

/// Errors from pressing a textual key sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The sequence named a button that does not exist
    #[error(transparent)]
    Key(#[from] KeyError),
    /// The engine reported an error while replaying the sequence
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Abstract driver trait for keypad interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::prelude::*;
///
/// let mut driver = EngineDriver::new();
/// driver.press_sequence("2+3=").unwrap();
/// assert_eq!(driver.display(), "5");
/// ```
pub trait CalculatorDriver {
    /// Forwards one button press.
    ///
    /// Errors are returned after being recorded as a notification; the
    /// display has already been reset.
    fn press(&mut self, key: Key) -> CalcResult<()>;

    /// Current display string
    fn display(&self) -> String;

    /// Notifications shown so far, oldest first
    fn notifications(&self) -> &[String];

    /// Presses every key, continuing past errors.
    ///
    /// Returns the first error seen, if any.
    fn press_all(&mut self, keys: &[Key]) -> CalcResult<()> {
        let mut first_error = None;
        for &key in keys {
            if let Err(err) = self.press(key) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// In-process driver: the engine plus a notification log
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
    notifications: Vec<String>,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Parses `keys` with [`parse_sequence`] and presses each one.
    ///
    /// Nothing is pressed when the sequence does not parse.
    pub fn press_sequence(&mut self, keys: &str) -> Result<(), DriverError> {
        let keys = parse_sequence(keys)?;
        self.press_all(&keys)?;
        Ok(())
    }

    /// Forgets past notifications
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: Key) -> CalcResult<()> {
        let outcome = self.engine.press(key);
        if let Err(err) = &outcome {
            info!(%key, error = %err, "notifying user");
            self.notifications.push(err.to_string());
        }
        outcome
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

// ===== Unified verification routines =====
// These work with ANY CalculatorDriver implementation.

fn press_labels<D: CalculatorDriver>(driver: &mut D, keys: &str) -> CalcResult<()> {
    let parsed = parse_sequence(keys);
    assert!(parsed.is_ok(), "invalid key sequence {keys:?}: {parsed:?}");
    driver.press_all(&parsed.unwrap_or_default())
}

fn assert_display<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    assert_eq!(driver.press(Key::Clear), Ok(()));
    let outcome = press_labels(driver, keys);
    assert_eq!(outcome, Ok(()), "after {keys}");
    assert_eq!(driver.display(), expected, "after {keys}");
}

/// Verifies digit entry, leading-zero collapsing and the decimal point
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    assert_display(driver, "123", "123");
    assert_display(driver, "05", "5");
    assert_display(driver, "3..", "3.");
    assert_display(driver, ".", "0.");
}

/// Verifies the four operations, chained evaluation, and that a new number
/// and operator after `=` start a new calculation
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_display(driver, "2+3=", "5");
    assert_display(driver, "10-4=", "6");
    assert_display(driver, "6*7=", "42");
    assert_display(driver, "20/4=", "5");
    assert_display(driver, "2+3+4=", "9");
    assert_display(driver, "7+0=", "7");
    assert_display(driver, "2+3=4+5=", "9");
    assert_display(driver, "2+3=*4=", "20");
}

/// Verifies that repeated equals re-applies the last operator
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) {
    assert_display(driver, "2+3=", "5");
    assert_eq!(driver.press(Key::Equals), Ok(()));
    assert_eq!(driver.display(), "10");
    assert_display(driver, "2+3=5=", "10");
}

/// Verifies percent and delete
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    assert_display(driver, "50%", "0.5");
    assert_display(driver, "123<", "12");
    assert_display(driver, "1<", "0");
    assert_display(driver, "5+<", "0");
}

/// Verifies that errors are reported and reset the display
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.press(Key::Clear), Ok(()));
    let before = driver.notifications().len();
    let result = press_labels(driver, "5/0=");
    assert!(result.is_err());
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.notifications().len(), before + 1);
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_entry(driver);
    verify_arithmetic(driver);
    verify_repeated_equals(driver);
    verify_editing(driver);
    verify_error_handling(driver);
}
