//! Discrete answer scale
//!
//! The questionnaire records preference intensity on a closed ordinal
//! scale 1..=5. Values outside the scale are a contract violation and
//! are rejected at construction, so every `AnswerValue` in the system
//! is valid by type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lowest scale value ("Detesto")
pub const SCALE_MIN: u8 = 1;
/// Highest scale value ("Gosto Muito")
pub const SCALE_MAX: u8 = 5;

/// Answer scale errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    /// Value outside the closed 1..=5 scale
    #[error("answer value {0} outside scale {SCALE_MIN}..={SCALE_MAX}")]
    OutOfRange(u8),
}

/// A single validated answer on the 1..=5 preference scale
///
/// Serializes as a bare integer; deserialization re-validates the range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    /// Create a validated answer value
    pub fn new(value: u8) -> Result<Self, ScaleError> {
        if (SCALE_MIN..=SCALE_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScaleError::OutOfRange(value))
        }
    }

    /// Raw scale value (1..=5)
    pub fn get(self) -> u8 {
        self.0
    }

    /// Semantic label for the scale value (reference instance wording)
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Detesto",
            2 => "Não Gosto",
            3 => "Neutro",
            4 => "Gosto",
            _ => "Gosto Muito",
        }
    }

    /// All scale options in ascending order, for rendering answer choices
    pub fn options() -> [AnswerValue; 5] {
        [Self(1), Self(2), Self(3), Self(4), Self(5)]
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = ScaleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> u8 {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
