//! Calculator: owns the register store and the operator streams side-by-side.

use std::io::{BufRead, Write};

use tracing::debug;

use super::feedback::Feedback;
use crate::command::{Command, is_quit_token};
use crate::common::error::CalcError;
use crate::common::reg::{RegName, RegisterFile};
use crate::config::Config;
use crate::input::TokenReader;
use crate::menu;

/// Top-level dispatcher: register state plus operator input and output.
///
/// Single-threaded; every read blocks on `R`.
#[derive(Debug)]
pub struct Calculator<R, W> {
    regs: RegisterFile,
    input: TokenReader<R>,
    out: W,
    config: Config,
}

impl<R: BufRead, W: Write> Calculator<R, W> {
    /// Creates a calculator with all registers at zero.
    pub const fn new(input: R, out: W, config: Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            input: TokenReader::new(input),
            out,
            config,
        }
    }

    /// Register store.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable register store.
    pub const fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Operator output written so far.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the calculator, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the session until the quit token or the end of input.
    ///
    /// Prints the menu first (unless disabled in the configuration), then
    /// prompts for and executes one command per iteration.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error ([`CalcError::is_fatal`]), i.e. a failure
    /// to read input or write output.
    pub fn run(&mut self) -> Result<(), CalcError> {
        if self.config.display.show_menu_on_start {
            menu::print_menu(&mut self.out, &self.config.display)?;
        }

        loop {
            write!(self.out, "Enter a command: ")?;
            self.out.flush()?;

            let Some(token) = self.input.next_token()? else {
                writeln!(self.out)?;
                debug!("end of input");
                return Ok(());
            };
            debug!("cmd={token}");

            match self.execute(&token) {
                Ok(_) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    writeln!(self.out)?;
                    debug!("session ended: {e}");
                    return Ok(());
                }
            }

            if is_quit_token(&token) {
                return Ok(());
            }
        }
    }

    /// Classifies and executes one command token.
    ///
    /// Rejected commands (empty, unknown, division by zero) are not errors:
    /// they come back as [`Feedback::Rejected`] and leave every register
    /// unchanged. Any feedback is also written to the log stream.
    ///
    /// # Returns
    ///
    /// The feedback for the command, or `None` for commands that only write
    /// to the operator output (menu, print, quit).
    ///
    /// # Errors
    ///
    /// * [`CalcError::UnexpectedEof`] if input ends while a register value is awaited.
    /// * [`CalcError::Io`] if reading input or writing output fails.
    pub fn execute(&mut self, token: &str) -> Result<Option<Feedback>, CalcError> {
        let command = match Command::parse(token) {
            Ok(command) => command,
            Err(e) => return Ok(Some(Self::report(Feedback::Rejected(e)))),
        };

        let feedback = match command {
            Command::Set(reg) => {
                let value = self.read_value(reg)?;
                self.regs.set(reg, value);
                Some(Feedback::RegisterSet { reg, value })
            }
            Command::Clear(reg) => {
                self.regs.clear_reg(reg);
                Some(Feedback::RegisterCleared(reg))
            }
            Command::Arith(op) => Some(match self.regs.apply(op) {
                Ok(result) => Feedback::Arith { op, result },
                Err(e) => Feedback::Rejected(e),
            }),
            Command::Menu => {
                menu::print_menu(&mut self.out, &self.config.display)?;
                None
            }
            Command::Print => {
                self.regs.dump(&mut self.out)?;
                None
            }
            Command::Quit => None,
        };

        Ok(feedback.map(Self::report))
    }

    /// Prompts until the operator supplies a token that parses as `f64`.
    ///
    /// Malformed tokens are logged and the prompt is repeated.
    fn read_value(&mut self, reg: RegName) -> Result<f64, CalcError> {
        loop {
            write!(self.out, "Enter value for register {reg}: ")?;
            self.out.flush()?;

            let token = self.input.next_token()?.ok_or(CalcError::UnexpectedEof)?;
            match token.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => Feedback::Rejected(CalcError::InvalidNumber(token)).log(),
            }
        }
    }

    fn report(feedback: Feedback) -> Feedback {
        feedback.log();
        feedback
    }
}
