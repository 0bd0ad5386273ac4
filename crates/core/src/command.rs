//! Command classification.
//!
//! Turns one operator token into a [`Command`]. Only the first character of the
//! token is significant and it is compared case-insensitively, so `"abc"` sets
//! register A and `"add"` does too.

use std::fmt;

use crate::common::constants::QUIT_TOKEN;
use crate::common::error::CalcError;
use crate::common::reg::RegName;

/// Arithmetic operation applied as `A = A op B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOp {
    /// Operator symbol as typed by the operator.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Evaluates `lhs op rhs` with native `f64` semantics.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero.
    pub fn eval(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a value and store it in the register.
    Set(RegName),
    /// Zero the register.
    Clear(RegName),
    /// Apply `A = A op B`.
    Arith(ArithOp),
    /// Reprint the menu.
    Menu,
    /// Print every register.
    Print,
    /// Quit request. Only the exact token [`QUIT_TOKEN`] ends the session;
    /// any other token starting with `q` or `Q` is a no-op.
    Quit,
}

impl Command {
    /// Classifies `token` by its lowercased first character.
    ///
    /// # Errors
    ///
    /// * [`CalcError::EmptyCommand`] if `token` is empty.
    /// * [`CalcError::UnknownCommand`] if the first character names no command.
    pub fn parse(token: &str) -> Result<Self, CalcError> {
        let first = token.chars().next().ok_or(CalcError::EmptyCommand)?;
        let ch = first.to_ascii_lowercase();

        match ch {
            'a'..='d' => RegName::from_char(ch)
                .map(Self::Set)
                .ok_or(CalcError::UnknownCommand(ch)),
            '1'..='4' => ch
                .to_digit(10)
                .and_then(|digit| RegName::from_index(digit as usize - 1))
                .map(Self::Clear)
                .ok_or(CalcError::UnknownCommand(ch)),
            '+' => Ok(Self::Arith(ArithOp::Add)),
            '-' => Ok(Self::Arith(ArithOp::Sub)),
            '*' => Ok(Self::Arith(ArithOp::Mul)),
            '/' => Ok(Self::Arith(ArithOp::Div)),
            'm' => Ok(Self::Menu),
            'p' => Ok(Self::Print),
            'q' => Ok(Self::Quit),
            other => Err(CalcError::UnknownCommand(other)),
        }
    }
}

/// Returns `true` if `token` ends the session.
///
/// This is an exact, case-sensitive comparison of the whole token: `"Q"` and
/// `"quit"` do not end the session.
pub fn is_quit_token(token: &str) -> bool {
    token == QUIT_TOKEN
}
