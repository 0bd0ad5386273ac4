//! Whitespace-delimited token input.
//!
//! Commands and register values arrive as whitespace-separated tokens, so a
//! single line such as `a 5 b 2 +` carries several of them.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::common::error::CalcError;

/// Reads one whitespace-delimited token at a time from a buffered reader.
///
/// Lines are pulled lazily: a new line is read only once every token of the
/// previous one has been consumed, so prompting stays interactive.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `inner`.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Blank lines are skipped. Bytes that are not valid UTF-8 are replaced
    /// with U+FFFD, so a stray byte becomes an ordinary unknown command.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Io`] if reading from the underlying stream fails.
    pub fn next_token(&mut self) -> Result<Option<String>, CalcError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.inner.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}
