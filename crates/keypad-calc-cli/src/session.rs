//! Key replay with a per-press record

use keypad_calc::prelude::{CalcError, CalculatorDriver, EngineDriver, EngineState, Key};
use serde::Serialize;

/// One key press and what the display showed afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Button label as it appears on the keypad
    pub key: String,
    /// Display after the press
    pub display: String,
    /// Notification raised by the press, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full record of a `run` invocation
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    /// Every press in order
    pub steps: Vec<Step>,
    /// Final display
    pub display: String,
    /// Final engine state
    pub state: EngineState,
}

/// A driver that remembers the first engine error it saw
#[derive(Debug, Default)]
pub struct Session {
    driver: EngineDriver,
    first_error: Option<CalcError>,
}

impl Session {
    /// Creates a session over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses one key and records the outcome
    pub fn press(&mut self, key: Key) -> Step {
        let error = match self.driver.press(key) {
            Ok(()) => None,
            Err(err) => {
                let message = err.to_string();
                self.first_error.get_or_insert(err);
                Some(message)
            }
        };
        Step {
            key: key.label(),
            display: self.driver.display(),
            error,
        }
    }

    /// Presses every key, continuing past errors
    pub fn replay(&mut self, keys: &[Key]) -> Vec<Step> {
        keys.iter().map(|&key| self.press(key)).collect()
    }

    /// Current display string
    #[must_use]
    pub fn display(&self) -> String {
        self.driver.display()
    }

    /// Current engine state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        self.driver.engine().state()
    }

    /// Notifications raised since the last call, oldest first
    pub fn take_notifications(&mut self) -> Vec<String> {
        let taken = self.driver.notifications().to_vec();
        self.driver.clear_notifications();
        taken
    }

    /// First engine error since the session started
    #[must_use]
    pub const fn first_error(&self) -> Option<&CalcError> {
        self.first_error.as_ref()
    }

    /// Builds a transcript from replayed steps and the current state
    #[must_use]
    pub fn transcript(&self, steps: Vec<Step>) -> Transcript {
        Transcript {
            steps,
            display: self.display(),
            state: self.state().clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keypad_calc::prelude::parse_sequence;

    fn replay(keys: &str) -> (Session, Vec<Step>) {
        let mut session = Session::new();
        let steps = session.replay(&parse_sequence(keys).unwrap());
        (session, steps)
    }

    #[test]
    fn test_replay_records_each_display() {
        let (session, steps) = replay("12+3=");
        let displays: Vec<_> = steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, ["1", "12", "12", "3", "15"]);
        assert_eq!(session.display(), "15");
        assert!(session.first_error().is_none());
    }

    #[test]
    fn test_step_keeps_key_label() {
        let (_, steps) = replay("3x4<");
        let labels: Vec<_> = steps.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(labels, ["3", "*", "4", "DEL"]);
    }

    #[test]
    fn test_error_recorded_and_replay_continues() {
        let (session, steps) = replay("5/0=7");
        assert_eq!(steps[3].error.as_deref(), Some("Cannot divide by zero"));
        assert_eq!(steps[3].display, "0");
        assert_eq!(steps[4].display, "7");
        assert_eq!(session.first_error(), Some(&CalcError::DivideByZero));
    }

    #[test]
    fn test_take_notifications_drains() {
        let (mut session, _) = replay("1/0= 2/0=");
        assert_eq!(
            session.take_notifications(),
            ["Cannot divide by zero", "Cannot divide by zero"]
        );
        assert!(session.take_notifications().is_empty());
        session.replay(&parse_sequence("3").unwrap());
        assert!(session.take_notifications().is_empty());
    }

    #[test]
    fn test_transcript_json() {
        let (session, steps) = replay("2+3=");
        let transcript = session.transcript(steps);
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["display"], "5");
        assert_eq!(json["steps"].as_array().unwrap().len(), 4);
        assert!(json["steps"][0].get("error").is_none());
        assert_eq!(json["state"]["current"], "5");
    }
}
