//! User-facing warnings and fatal errors.
//!
//! Warnings print once and the program carries on with a fallback. Fatal
//! errors print the cause, a message and a suggested remedy; the caller then
//! exits with a non-zero status.

use std::fmt;

use crossterm::style::Stylize;

use crate::types::LifeError;

/// A recoverable problem and what the user can do about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub remedy: String,
}

impl Warning {
    pub fn new(message: impl Into<String>, remedy: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            remedy: remedy.into(),
        }
    }

    /// Warning for a preset name that matched nothing.
    pub fn unknown_pattern(name: &str) -> Self {
        Self::new(
            format!("Unknown pattern '{}' found. Continued with random as a default.", name),
            "Check the pattern exists or any typos (`tui-life patterns` lists them).",
        )
    }

    pub fn show(&self) {
        log::warn!("{}", self.message);
        eprintln!("{}\n{}", "[WARNING]".yellow().bold(), self);
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.message, self.remedy)
    }
}

/// An unrecoverable error with a suggested remedy.
#[derive(Debug)]
pub struct Fatal {
    pub error: anyhow::Error,
    pub message: String,
    pub remedy: String,
}

impl Fatal {
    pub fn new(
        error: impl Into<anyhow::Error>,
        message: impl Into<String>,
        remedy: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            remedy: remedy.into(),
        }
    }

    /// Classify an error that ended a session.
    pub fn from_session(error: anyhow::Error) -> Self {
        match error.downcast_ref::<LifeError>() {
            Some(LifeError::DisplayInit(_)) => Self::new(
                error,
                "Cannot initialise the terminal screen.",
                "Please try to re-run the program, and maybe reset the terminal using `reset`.",
            ),
            Some(LifeError::DisplayTeardown(_)) => Self::new(
                error,
                "Cannot restore the terminal screen.",
                "Run `reset` to restore the terminal.",
            ),
            _ => Self::new(
                error,
                "The display failed while the game was running.",
                "Please try to re-run the program.",
            ),
        }
    }

    pub fn show(&self) {
        log::error!("{}: {:#}", self.message, self.error);
        eprintln!("{}\n{}", "[ERROR]".red().bold(), self);
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}\n{}\n{}", self.error, self.message, self.remedy)
    }
}
