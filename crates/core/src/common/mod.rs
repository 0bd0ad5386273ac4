//! Common types shared across the calculator.
//!
//! This module provides the building blocks used by the dispatcher and its callers:
//! 1. **Constants:** Register count and the session-ending token.
//! 2. **Error Handling:** The `CalcError` taxonomy for command and I/O failures.
//! 3. **Register Management:** Register names and the four-slot register store.

/// Common constants used throughout the calculator.
pub mod constants;

/// Error types.
pub mod error;

/// Register names and register store.
pub mod reg;

pub use constants::{NUM_REGISTERS, QUIT_TOKEN};
pub use error::CalcError;
pub use reg::{RegName, RegisterFile};
