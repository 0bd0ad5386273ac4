//! Calculator error definitions.
//!
//! This module defines every failure the calculator can report. It provides:
//! 1. **Command Errors:** Non-fatal rejections that are logged and followed by the next prompt.
//! 2. **Input Errors:** Malformed register values and input ending mid-command.
//! 3. **System Errors:** I/O and configuration failures that end the session.

use std::io;

use thiserror::Error;

/// Errors produced while classifying or executing calculator commands.
///
/// The `Display` output of the command errors is the exact wording written to
/// the log stream, so these messages must not change.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The operator submitted a token with no characters.
    #[error("Empty command")]
    EmptyCommand,

    /// `/` was requested while register B holds zero.
    ///
    /// Register A is left unchanged.
    #[error("Division by zero error!")]
    DivisionByZero,

    /// The first character of the token does not name any command.
    ///
    /// The associated value is the lowercased offending character.
    #[error("{0} is an unknown command")]
    UnknownCommand(char),

    /// A register value token could not be parsed as a floating-point number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// A register ordinal outside `0..=3` was passed to the register store.
    #[error("register ordinal {0} is out of range (expected 0-3)")]
    RegisterOutOfRange(usize),

    /// Input ended while a register value was being read.
    #[error("input ended while waiting for a register value")]
    UnexpectedEof,

    /// Reading commands or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configuration could not be parsed or holds an invalid value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CalcError {
    /// Returns `true` if the error ends the command loop.
    ///
    /// Command rejections and malformed numbers are reported and the loop
    /// continues. `UnexpectedEof` ends the session normally.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Config(_))
    }
}
