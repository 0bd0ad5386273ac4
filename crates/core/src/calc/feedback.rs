//! Log-stream feedback.
//!
//! Each dispatch produces at most one [`Feedback`] message. Its `Display`
//! output is the exact text written to the log stream.

use std::fmt;

use crate::command::ArithOp;
use crate::common::error::CalcError;
use crate::common::reg::RegName;

/// Log severity of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A command completed.
    Info,
    /// A command was rejected; the session continues.
    Error,
}

/// Message emitted to the log stream after a command.
#[derive(Debug)]
pub enum Feedback {
    /// A register received a new value.
    RegisterSet {
        /// Register that was written.
        reg: RegName,
        /// Value stored.
        value: f64,
    },
    /// A register was zeroed.
    RegisterCleared(RegName),
    /// `A = A op B` completed.
    Arith {
        /// Operation applied.
        op: ArithOp,
        /// New value of register A.
        result: f64,
    },
    /// The command was rejected without touching any register.
    Rejected(CalcError),
}

impl Feedback {
    /// Severity the message is logged at.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Rejected(_) => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Writes the message to the log stream at its severity.
    pub fn log(&self) {
        match self.severity() {
            Severity::Info => tracing::info!("{}", self),
            Severity::Error => tracing::error!("{}", self),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegisterSet { reg, value } => write!(f, "Register {reg} set to {value}"),
            Self::RegisterCleared(reg) => write!(f, "Register {reg} cleared"),
            Self::Arith { op, result } => write!(f, "A = A {op} B -> {result}"),
            Self::Rejected(err) => write!(f, "{err}"),
        }
    }
}
