//! Operator input reading with retry-until-valid loops.
//!
//! # Responsibility
//! - Define the prompt seam the controller talks to.
//! - Read single lines from any `BufRead` source.
//! - Re-prompt until a pure parse predicate accepts the line.
//!
//! # Invariants
//! - Retry loops are unbounded; they end only on valid input or closed input.
//! - Parse functions never touch I/O, so they are testable on plain strings.

use crate::command::MenuCommand;
use registry_core::{is_blank, MemberId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub type PromptResult<T> = Result<T, PromptError>;

#[derive(Debug)]
pub enum PromptError {
    Io(io::Error),
    /// The input stream reached end-of-file.
    Closed,
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Closed => write!(f, "input closed"),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Closed => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Accepts a required text field; blank lines are rejected.
pub fn parse_required(line: &str) -> Option<String> {
    if is_blank(line) {
        return None;
    }
    Some(line.trim().to_string())
}

/// Accepts a positive member id.
pub fn parse_member_id(line: &str) -> Option<MemberId> {
    line.trim().parse::<MemberId>().ok().filter(|id| *id > 0)
}

pub fn parse_menu_option(line: &str) -> Option<MenuCommand> {
    MenuCommand::parse(line)
}

/// Source of operator answers plus the sink menus and results are written to.
///
/// `Prompter` serves scripted and piped input; the binary uses a
/// terminal-backed implementation when stdin is interactive.
pub trait OperatorPrompt {
    type Output: Write;

    fn output(&mut self) -> &mut Self::Output;

    /// Shows `prompt` and returns one raw answer line, possibly blank.
    fn ask_line(&mut self, prompt: &str) -> PromptResult<String>;

    /// Shows `prompt`, re-prompting with `rejection` until `parse` accepts.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> PromptResult<T>;
}

/// Line-oriented prompt over a reader/writer pair.
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Reads one line without its trailing newline.
    pub fn read_line(&mut self) -> PromptResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<I: BufRead, O: Write> OperatorPrompt for Prompter<I, O> {
    type Output = O;

    fn output(&mut self) -> &mut O {
        &mut self.output
    }

    fn ask_line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn ask_until<T>(
        &mut self,
        prompt: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> PromptResult<T> {
        loop {
            let line = self.ask_line(prompt)?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            writeln!(self.output, "{rejection}")?;
        }
    }
}
