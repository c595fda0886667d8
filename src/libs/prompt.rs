//! Interactive prompts.
//!
//! Handlers never talk to the terminal directly; they ask a [`Prompt`] for
//! text, a number, or a choice. [`Terminal`] is the `dialoguer` backed
//! implementation used by the binary. Tests drive handlers with a scripted
//! implementation instead.
//!
//! Numeric validation lives here and not in handler bodies: an invalid salary
//! is reported and asked for again until a finite number is entered.

use super::messages::Message;
use crate::msg_error;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SalaryError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// Parses a salary, accepting any finite decimal number.
///
/// Unlike a lenient prefix parse, trailing garbage such as `12k` is rejected.
pub fn parse_salary(input: &str) -> Result<f64, SalaryError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| SalaryError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(SalaryError::NotFinite(trimmed.to_string()));
    }
    Ok(value)
}

pub trait Prompt {
    /// Free text; empty input is accepted.
    fn text(&mut self, message: Message) -> Result<String>;

    /// Index into `items` of the chosen entry.
    fn select(&mut self, message: Message, items: &[String]) -> Result<usize>;

    /// A finite number. Invalid input is reported and requested again.
    fn number(&mut self, message: Message) -> Result<f64> {
        loop {
            let input = self.text(message.clone())?;
            match parse_salary(&input) {
                Ok(value) => return Ok(value),
                Err(_) => msg_error!(Message::InvalidSalary),
            }
        }
    }
}

/// Terminal prompts backed by `dialoguer`.
pub struct Terminal {
    theme: ColorfulTheme,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for Terminal {
    fn text(&mut self, message: Message) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(message.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn select(&mut self, message: Message, items: &[String]) -> Result<usize> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(message.to_string())
            .items(items)
            .default(0)
            .interact()?;
        Ok(selection)
    }

    // dialoguer re-asks in place, so the error appears under the prompt
    // instead of as a separate line.
    fn number(&mut self, message: Message) -> Result<f64> {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                parse_salary(input).map(|_| ()).map_err(|_| Message::InvalidSalary.to_string())
            })
            .interact_text()?;
        Ok(parse_salary(&input)?)
    }
}

/// True when the error was caused by the user interrupting a prompt.
pub fn is_interrupted(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::Interrupted)
            || matches!(
                cause.downcast_ref::<dialoguer::Error>(),
                Some(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted
            )
    })
}
