//! Keypad buttons
//!
//! Every button a UI can forward to the engine. Parsing happens here, at the
//! boundary, so the engine never sees a character outside the keypad.

use crate::core::Operation;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning UI input into keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A multi-character token that names no button
    #[error("Unknown key: {0:?}")]
    Unknown(String),
    /// A character inside a key sequence that names no button
    #[error("Unknown key {ch:?} in {token:?}")]
    UnknownChar {
        /// The offending character
        ch: char,
        /// The token it appeared in
        token: String,
    },
}

/// A single decimal digit, `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` when `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Reads an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Character printed on the button
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A keypad button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit button (0-9)
    Digit(Digit),
    /// The decimal point button
    Decimal,
    /// An operator button
    Operator(Operation),
    /// The equals button
    Equals,
    /// The percent button
    Percent,
    /// The delete (backspace) button
    Delete,
    /// The clear button: full reset
    Clear,
}

impl Key {
    /// Maps a single button character to a key.
    ///
    /// `<` and the ASCII backspace/delete characters mean Delete; `C`
    /// means Clear.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(ch) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operation::from_symbol(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            '<' | '\u{8}' | '\u{7f}' => Some(Self::Delete),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Maps a button word such as `DEL` or `AC` to a key
    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "DEL" | "BACK" | "BACKSPACE" => Some(Self::Delete),
            "AC" | "CLEAR" => Some(Self::Clear),
            _ => None,
        }
    }

    /// The label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Percent => "%".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Self::from_char(ch).ok_or_else(|| KeyError::Unknown(token.to_string()));
        }
        Self::from_word(token).ok_or_else(|| KeyError::Unknown(token.to_string()))
    }
}

/// Splits a compact key sequence such as `"12+3=="` into keys.
///
/// Whitespace separates tokens and is otherwise ignored. A token that is a
/// button word (`DEL`, `BACK`, `AC`, `CLEAR`) is one key; any other token is
/// read one character at a time with [`Key::from_char`].
pub fn parse_sequence(input: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();
    for token in input.split_whitespace() {
        if let Some(key) = Key::from_word(token) {
            keys.push(key);
            continue;
        }
        for ch in token.chars() {
            let key = Key::from_char(ch).ok_or_else(|| KeyError::UnknownChar {
                ch,
                token: token.to_string(),
            })?;
            keys.push(key);
        }
    }
    Ok(keys)
}
