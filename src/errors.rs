//! Error types for chart validation and transposition
//!
//! Every failure the engine can report is one of five kinds, and each
//! carries the source fragment that triggered it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure raised while parsing notes, chords or bar lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Note token is empty or does not start with a letter
    #[error("no natural in note: {0}")]
    NoNatural(String),

    /// Note starts with a letter outside A-G
    #[error("invalid natural in note: {0}")]
    InvalidNatural(String),

    /// Note has characters that cannot belong to it (e.g. a doubled accidental)
    #[error("invalid note: {0}")]
    InvalidNote(String),

    #[error("bar line should start with stripe: {0}")]
    BarLineShouldStartWithStripe(String),

    #[error("bar line should end with stripe: {0}")]
    BarLineShouldEndWithStripe(String),
}

/// Payload-free discriminant of [`ChartError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NoNatural,
    InvalidNatural,
    InvalidNote,
    BarLineShouldStartWithStripe,
    BarLineShouldEndWithStripe,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoNatural => "NoNatural",
            ErrorKind::InvalidNatural => "InvalidNatural",
            ErrorKind::InvalidNote => "InvalidNote",
            ErrorKind::BarLineShouldStartWithStripe => "BarLineShouldStartWithStripe",
            ErrorKind::BarLineShouldEndWithStripe => "BarLineShouldEndWithStripe",
        }
    }
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::NoNatural(_) => ErrorKind::NoNatural,
            ChartError::InvalidNatural(_) => ErrorKind::InvalidNatural,
            ChartError::InvalidNote(_) => ErrorKind::InvalidNote,
            ChartError::BarLineShouldStartWithStripe(_) => ErrorKind::BarLineShouldStartWithStripe,
            ChartError::BarLineShouldEndWithStripe(_) => ErrorKind::BarLineShouldEndWithStripe,
        }
    }

    /// The offending source fragment
    pub fn value(&self) -> &str {
        match self {
            ChartError::NoNatural(v)
            | ChartError::InvalidNatural(v)
            | ChartError::InvalidNote(v)
            | ChartError::BarLineShouldStartWithStripe(v)
            | ChartError::BarLineShouldEndWithStripe(v) => v,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
