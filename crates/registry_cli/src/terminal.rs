//! Interactive terminal prompts backed by `dialoguer`.
//!
//! # Responsibility
//! - Answer controller prompts on a real terminal with line editing.
//! - Reuse the pure parse predicates as `dialoguer` validators.

use crate::prompt::{OperatorPrompt, PromptError, PromptResult};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io;

impl From<dialoguer::Error> for PromptError {
    fn from(value: dialoguer::Error) -> Self {
        match value {
            dialoguer::Error::IO(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                PromptError::Closed
            }
            dialoguer::Error::IO(err) => PromptError::Io(err),
        }
    }
}

/// Prompt implementation for an attached terminal.
pub struct TerminalPrompt {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    /// Returns `None` when stdout is not a terminal.
    pub fn stdout() -> Option<Self> {
        let term = Term::stdout();
        if !term.is_term() {
            return None;
        }
        Some(Self {
            term,
            theme: ColorfulTheme::default(),
        })
    }
}

// The theme draws its own separator after the prompt text.
fn label(prompt: &str) -> &str {
    prompt.trim_end_matches([':', ' '])
}

impl OperatorPrompt for TerminalPrompt {
    type Output = Term;

    fn output(&mut self) -> &mut Term {
        &mut self.term
    }

    fn ask_line(&mut self, prompt: &str) -> PromptResult<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(label(prompt))
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(line)
    }

    fn ask_until<T>(
        &mut self,
        prompt: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> PromptResult<T> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(label(prompt))
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                match parse(input) {
                    Some(_) => Ok(()),
                    None => Err(rejection.to_string()),
                }
            })
            .interact_text_on(&self.term)?;

        parse(&line).ok_or_else(|| {
            PromptError::Io(io::Error::new(io::ErrorKind::InvalidData, rejection.to_string()))
        })
    }
}
