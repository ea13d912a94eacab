//! Calculator engine: the keypad state machine
//!
//! The engine is a Mealy machine. [`EngineState`] is moved into
//! [`EngineState::apply`] together with a [`Key`] and comes back as the next
//! state plus the outcome, so every transition is a pure function call.
//! [`Engine`] wraps that function with one handler per input class for UI
//! collaborators that prefer a mutable object.
//!
//! ```text
//! phase                digit / .            operator            =                  DEL
//! FreshEntry           ContinuingEntry      AwaitingOperand     (no-op)            reset
//! ContinuingEntry      ContinuingEntry      AwaitingOperand     (no-op)            trim
//! AwaitingOperand      EnteringOperand      AwaitingOperand     evaluate, Result   reset
//! EnteringOperand      EnteringOperand      evaluate, Awaiting  evaluate, Result   trim
//! ShowingResult        EnteringAfterResult  AwaitingOperand     repeat, Result     reset
//! EnteringAfterResult  EnteringAfterResult  AwaitingOperand     repeat, Result     trim
//! ```
//!
//! Equals clears the pending operator. The result phases only remember the
//! last operator so that another `=` can repeat it; an operator pressed
//! from them starts a new calculation instead of chaining.

use crate::core::{format_number, parse_operand, CalcResult, Operation};
use crate::keys::{Digit, Key};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Display shown after construction and after every reset
pub const INITIAL_DISPLAY: &str = "0";

/// An operator that has been selected together with its left-hand operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    /// Left operand in canonical display form
    pub left: String,
    /// Operator waiting for its right operand
    pub op: Operation,
}

impl Pending {
    fn new(left: impl Into<String>, op: Operation) -> Self {
        Self {
            left: left.into(),
            op,
        }
    }

    /// Applies the pending operator to `right`, returning the display form
    fn evaluate(&self, right: &str) -> CalcResult<String> {
        let left = parse_operand(&self.left)?;
        let right_value = parse_operand(right)?;
        let result = self.op.apply(left, right_value)?;
        let formatted = format_number(result);
        debug!(left = %self.left, op = %self.op, right, result = %formatted, "evaluated");
        Ok(formatted)
    }
}

/// Where the engine is in the entry cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator selected; the display is frozen and the next digit
    /// starts a new number
    FreshEntry,
    /// No operator selected; digits extend the display
    ContinuingEntry,
    /// Operator selected; the display shows the left operand (or the chained
    /// result) and the next digit starts the right operand
    AwaitingOperand(Pending),
    /// Operator selected; the right operand is being typed
    EnteringOperand(Pending),
    /// `=` was pressed; the display is frozen on the result, which is the
    /// left operand of the remembered operator
    ShowingResult(Pending),
    /// A new number is being typed after `=`
    EnteringAfterResult(Pending),
}

impl Phase {
    /// True while the display is a number being typed
    #[must_use]
    pub const fn is_entering(&self) -> bool {
        matches!(
            self,
            Self::ContinuingEntry | Self::EnteringOperand(_) | Self::EnteringAfterResult(_)
        )
    }

    /// The selected operator and its left operand, if any
    #[must_use]
    pub const fn pending(&self) -> Option<&Pending> {
        match self {
            Self::AwaitingOperand(pending) | Self::EnteringOperand(pending) => Some(pending),
            Self::FreshEntry
            | Self::ContinuingEntry
            | Self::ShowingResult(_)
            | Self::EnteringAfterResult(_) => None,
        }
    }

    /// The operator remembered by `=` and the result it produced
    #[must_use]
    pub const fn repeat(&self) -> Option<&Pending> {
        match self {
            Self::ShowingResult(repeat) | Self::EnteringAfterResult(repeat) => Some(repeat),
            Self::FreshEntry
            | Self::ContinuingEntry
            | Self::AwaitingOperand(_)
            | Self::EnteringOperand(_) => None,
        }
    }

    /// Phase after the first keystroke of a new number
    fn begin_entry(self) -> Self {
        match self {
            Self::FreshEntry => Self::ContinuingEntry,
            Self::AwaitingOperand(pending) => Self::EnteringOperand(pending),
            Self::ShowingResult(repeat) => Self::EnteringAfterResult(repeat),
            entering @ (Self::ContinuingEntry
            | Self::EnteringOperand(_)
            | Self::EnteringAfterResult(_)) => entering,
        }
    }
}

/// Complete interaction state of the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    current: String,
    phase: Phase,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// The reset state: display `"0"`, nothing pending, entering
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: INITIAL_DISPLAY.to_string(),
            phase: Phase::ContinuingEntry,
        }
    }

    /// The number currently displayed
    #[must_use]
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Current phase of the entry cycle
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Left operand captured by the last operator or produced by `=`
    #[must_use]
    pub fn left_operand(&self) -> Option<&str> {
        self.phase
            .pending()
            .or_else(|| self.phase.repeat())
            .map(|pending| pending.left.as_str())
    }

    /// Operator awaiting application; `=` clears it
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.phase.pending().map(|pending| pending.op)
    }

    /// True while the display is a number being typed
    #[must_use]
    pub const fn is_entering(&self) -> bool {
        self.phase.is_entering()
    }

    /// Runs one transition.
    ///
    /// On error the returned state is the reset state; the error is handed
    /// back so the collaborator can show it.
    pub fn apply(self, key: Key) -> (Self, CalcResult<()>) {
        match key {
            Key::Digit(digit) => (self.push_digit(digit), Ok(())),
            Key::Decimal => (self.push_decimal(), Ok(())),
            Key::Delete => (self.delete(), Ok(())),
            Key::Clear => (Self::new(), Ok(())),
            Key::Operator(op) => Self::recover(key, self.select_operator(op)),
            Key::Equals => Self::recover(key, self.equals()),
            Key::Percent => Self::recover(key, self.percent()),
        }
    }

    fn recover(key: Key, outcome: CalcResult<Self>) -> (Self, CalcResult<()>) {
        match outcome {
            Ok(next) => (next, Ok(())),
            Err(err) => {
                warn!(%key, error = %err, "calculation failed; resetting");
                (Self::new(), Err(err))
            }
        }
    }

    fn push_digit(self, digit: Digit) -> Self {
        let Self { mut current, phase } = self;
        if phase.is_entering() {
            // "0" followed by a digit is replaced, never "05"
            if current == "0" {
                current.clear();
            }
            current.push(digit.as_char());
        } else {
            current = digit.to_string();
        }
        Self {
            current,
            phase: phase.begin_entry(),
        }
    }

    fn push_decimal(self) -> Self {
        let Self { mut current, phase } = self;
        if !phase.is_entering() {
            current = "0.".to_string();
        } else if !current.contains('.') {
            current.push('.');
        }
        Self {
            current,
            phase: phase.begin_entry(),
        }
    }

    fn select_operator(self, op: Operation) -> CalcResult<Self> {
        let Self { current, phase } = self;
        let left = match phase {
            // 2 + 3 + : resolve 2 + 3 before starting the next +
            Phase::EnteringOperand(pending) => pending.evaluate(&current)?,
            Phase::FreshEntry
            | Phase::ContinuingEntry
            | Phase::AwaitingOperand(_)
            | Phase::ShowingResult(_)
            | Phase::EnteringAfterResult(_) => current,
        };
        Ok(Self {
            phase: Phase::AwaitingOperand(Pending::new(left.clone(), op)),
            current: left,
        })
    }

    fn equals(self) -> CalcResult<Self> {
        let Self { current, phase } = self;
        match phase {
            Phase::AwaitingOperand(pending)
            | Phase::EnteringOperand(pending)
            | Phase::ShowingResult(pending)
            | Phase::EnteringAfterResult(pending) => {
                // From ShowingResult the display is the left operand itself,
                // so a second = applies `result op result`.
                let result = pending.evaluate(&current)?;
                Ok(Self {
                    phase: Phase::ShowingResult(Pending::new(result.clone(), pending.op)),
                    current: result,
                })
            }
            phase @ (Phase::FreshEntry | Phase::ContinuingEntry) => Ok(Self { current, phase }),
        }
    }

    fn percent(self) -> CalcResult<Self> {
        let Self { current, phase } = self;
        let value = parse_operand(&current)? / 100.0;
        let current = format_number(value);
        let phase = match phase {
            Phase::AwaitingOperand(pending) | Phase::EnteringOperand(pending) => {
                Phase::AwaitingOperand(Pending::new(current.clone(), pending.op))
            }
            Phase::ShowingResult(repeat) | Phase::EnteringAfterResult(repeat) => {
                Phase::ShowingResult(Pending::new(current.clone(), repeat.op))
            }
            Phase::FreshEntry | Phase::ContinuingEntry => Phase::FreshEntry,
        };
        Ok(Self { current, phase })
    }

    fn delete(self) -> Self {
        let Self { mut current, phase } = self;
        // A frozen result is never edited in place
        if !phase.is_entering() {
            return Self::new();
        }
        current.pop();
        if current.is_empty() {
            current.push_str(INITIAL_DISPLAY);
        }
        Self { current, phase }
    }
}

/// Mutable handle over [`EngineState`] with one handler per button class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    state: EngineState,
}

impl Engine {
    /// Creates an engine showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot
    #[must_use]
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// The string the UI should show
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Feeds any key through the state machine.
    ///
    /// The display must be re-read afterwards; after an error it is `"0"`.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        let (next, outcome) = std::mem::take(&mut self.state).apply(key);
        self.state = next;
        trace!(%key, display = %self.state.display(), "key pressed");
        outcome
    }

    /// Digit button
    pub fn on_digit(&mut self, digit: Digit) -> String {
        self.advance(Key::Digit(digit), |state| state.push_digit(digit))
    }

    /// Decimal point button
    pub fn on_decimal_point(&mut self) -> String {
        self.advance(Key::Decimal, EngineState::push_decimal)
    }

    /// Operator button. Re-read the display afterwards: a chained
    /// evaluation may have replaced it.
    pub fn on_operator(&mut self, op: Operation) -> CalcResult<()> {
        self.press(Key::Operator(op))
    }

    /// Equals button
    pub fn on_equals(&mut self) -> CalcResult<String> {
        self.press(Key::Equals)?;
        Ok(self.display().to_string())
    }

    /// Percent button
    pub fn on_percent(&mut self) -> CalcResult<String> {
        self.press(Key::Percent)?;
        Ok(self.display().to_string())
    }

    /// Delete button
    pub fn on_delete(&mut self) -> String {
        self.advance(Key::Delete, EngineState::delete)
    }

    /// Clears everything back to the initial state
    pub fn reset(&mut self) -> String {
        self.advance(Key::Clear, |_| EngineState::new())
    }

    fn advance(&mut self, key: Key, transition: impl FnOnce(EngineState) -> EngineState) -> String {
        self.state = transition(std::mem::take(&mut self.state));
        trace!(%key, display = %self.state.display(), "key pressed");
        self.state.display().to_string()
    }
}
