//! Keypad Calculator Engine
//!
//! The logic behind a single-screen button calculator: a small state machine
//! that turns a sequence of key presses into the string on the display. UI
//! layers forward button presses and read the display back; they never see
//! operands or pending operators directly.
//!
//! - [`core::Engine`] / [`core::EngineState`]: the state machine
//! - [`keys::Key`]: the closed set of buttons, parsed at the UI boundary
//! - [`driver::CalculatorDriver`]: the collaborator contract and reusable
//!   verification routines
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for key in parse_sequence("2 + 3 + 4 =").unwrap() {
//!     engine.press(key).unwrap();
//! }
//! assert_eq!(engine.display(), "9");
//!
//! // Errors reset the engine; the UI shows the message and re-reads "0".
//! engine.reset();
//! for key in parse_sequence("5 / 0").unwrap() {
//!     engine.press(key).unwrap();
//! }
//! assert_eq!(engine.on_equals(), Err(CalcError::DivideByZero));
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keys;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_operand, CalcError, CalcResult, Engine, EngineState, Operation,
        Pending, Phase,
    };
    pub use crate::driver::{CalculatorDriver, DriverError, EngineDriver};
    pub use crate::keys::{parse_sequence, Digit, Key, KeyError};
}
