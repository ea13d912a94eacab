//! The four keypad operations

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operator button: compile-time guarantee that only valid operators
/// ever reach the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps a button label to an operation.
    ///
    /// Keypads commonly print `X`/`×` on the multiply button and `÷` on the
    /// divide button, so those labels are accepted too.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Division by exactly zero fails with [`CalcError::DivideByZero`]; a
    /// non-finite result fails with [`CalcError::Overflow`].
    pub fn apply(self, left: f64, right: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                left / right
            }
        };
        Self::check_overflow(result)
    }

    fn check_overflow(result: f64) -> CalcResult<f64> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Symbol tests ---

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn test_from_symbol_round_trips_every_operation() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_accepts_keypad_labels() {
        assert_eq!(Operation::from_symbol('X'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('x'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('×'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('÷'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('−'), Some(Operation::Subtract));
    }

    #[test]
    fn test_from_symbol_rejects_unknown() {
        assert_eq!(Operation::from_symbol('^'), None);
        assert_eq!(Operation::from_symbol('%'), None);
        assert_eq!(Operation::from_symbol('7'), None);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Multiply.to_string(), "*");
    }

    // --- Arithmetic tests ---

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Add.apply(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0), Ok(-6.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(20.0, 4.0), Ok(5.0));
        assert_eq!(Operation::Divide.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(5.0, 0.0),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            Operation::Divide.apply(5.0, -0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 10.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Add.apply(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"Divide\"");
    }

    proptest! {
        #[test]
        fn prop_finite_inputs_never_yield_non_finite_ok(
            a in -1e300f64..1e300f64,
            b in -1e300f64..1e300f64,
        ) {
            for op in Operation::ALL {
                if let Ok(value) = op.apply(a, b) {
                    prop_assert!(value.is_finite());
                }
            }
        }

        #[test]
        fn prop_divide_by_nonzero_succeeds(a in -1e6f64..1e6f64, b in 1e-3f64..1e6f64) {
            prop_assert!(Operation::Divide.apply(a, b).is_ok());
            prop_assert!(Operation::Divide.apply(a, -b).is_ok());
        }
    }
}
