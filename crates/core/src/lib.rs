//! Four-register interactive calculator library.
//!
//! This crate implements the ClaudiaCalc command loop with the following:
//! 1. **Registers:** A fixed store of four `f64` slots named A through D.
//! 2. **Commands:** Single-character command classification (set, clear, arithmetic, menu, print, quit).
//! 3. **Dispatcher:** A blocking read-dispatch-print loop over any buffered reader and writer.
//! 4. **Display:** The menu banner and register listing.
//! 5. **Configuration:** Display and logging settings with JSON deserialization.

/// Command loop (dispatcher and the feedback it emits).
pub mod calc;
/// Command classification from operator tokens.
pub mod command;
/// Common types and constants (register names, register store, errors).
pub mod common;
/// Calculator configuration (defaults and JSON loading).
pub mod config;
/// Whitespace-delimited token input.
pub mod input;
/// Menu banner rendering.
pub mod menu;

/// Main dispatcher type; owns the registers and the I/O streams.
pub use crate::calc::Calculator;
/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
