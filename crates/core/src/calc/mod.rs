//! Command loop.
//!
//! This module contains the dispatcher that drives a calculator session:
//! 1. **Dispatcher:** [`Calculator`] reads tokens, classifies them, and mutates the registers.
//! 2. **Feedback:** [`Feedback`] is the log-stream message produced by each dispatch.

/// The read-dispatch-print loop.
pub mod dispatcher;

/// Log-stream messages and their severity.
pub mod feedback;

pub use dispatcher::Calculator;
pub use feedback::{Feedback, Severity};
