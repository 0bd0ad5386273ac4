//! Register names and the register store.
//!
//! This module provides the `RegisterFile` struct, the calculator's only mutable state.
//! It provides:
//! 1. **Naming:** `RegName`, mapping the letters A-D to fixed ordinals 0-3.
//! 2. **Storage:** Exactly four `f64` slots, zero at construction.
//! 3. **Arithmetic:** In-place `A = A op B` updates.
//! 4. **Observability:** Listing of every register in A, B, C, D order.

use std::fmt;
use std::io::{self, Write};

use super::constants::NUM_REGISTERS;
use super::error::CalcError;
use crate::command::ArithOp;

/// Name of one of the four registers.
///
/// The discriminant is the register's ordinal in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegName {
    /// Register A, the accumulator for arithmetic results.
    A = 0,
    /// Register B, the right-hand operand of arithmetic.
    B = 1,
    /// Register C.
    C = 2,
    /// Register D.
    D = 3,
}

impl RegName {
    /// All registers in ordinal order.
    pub const ALL: [Self; NUM_REGISTERS] = [Self::A, Self::B, Self::C, Self::D];

    /// Resolves a register from its letter, ignoring case.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            _ => None,
        }
    }

    /// Resolves a register from its ordinal (0-3).
    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::B),
            2 => Some(Self::C),
            3 => Some(Self::D),
            _ => None,
        }
    }

    /// Ordinal of the register in the store.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase letter used when the register is printed.
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
        }
    }
}

impl fmt::Display for RegName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The four-slot register store.
///
/// Every slot always holds a defined value; no slot is ever added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegisterFile {
    regs: [f64; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register store with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0.0; NUM_REGISTERS],
        }
    }

    /// Writes `value` into the named register.
    pub const fn set(&mut self, name: RegName, value: f64) {
        self.regs[name.index()] = value;
    }

    /// Reads the named register.
    pub const fn reg(&self, name: RegName) -> f64 {
        self.regs[name.index()]
    }

    /// Reads the register at ordinal `idx`.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if `idx` is not in `0..=3`.
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.regs.get(idx).copied()
    }

    /// Returns a copy of all four registers in A, B, C, D order.
    pub const fn get_all(&self) -> [f64; NUM_REGISTERS] {
        self.regs
    }

    /// Sets the register at ordinal `idx` to zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::RegisterOutOfRange`] if `idx` is not in `0..=3`.
    pub fn clear(&mut self, idx: usize) -> Result<(), CalcError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(CalcError::RegisterOutOfRange(idx))?;
        *slot = 0.0;
        Ok(())
    }

    /// Sets the named register to zero.
    pub const fn clear_reg(&mut self, name: RegName) {
        self.regs[name.index()] = 0.0;
    }

    /// Performs `A = A op B`, leaving B, C and D untouched.
    ///
    /// # Returns
    ///
    /// The new value of register A.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] for [`ArithOp::Div`] when B is
    /// zero; register A keeps its previous value.
    pub fn apply(&mut self, op: ArithOp) -> Result<f64, CalcError> {
        let result = op.eval(self.reg(RegName::A), self.reg(RegName::B))?;
        self.set(RegName::A, result);
        Ok(result)
    }

    /// Writes one `<name> = <value>` line per register to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for name in RegName::ALL {
            writeln!(out, "{name} = {}", self.reg(name))?;
        }
        Ok(())
    }
}
