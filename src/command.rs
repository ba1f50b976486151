// src/command.rs - Command-line parsing (`:w`, `:q`, `:e <path>` ...)

use std::path::PathBuf;
use thiserror::Error;

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Write(Option<PathBuf>),
    WriteQuit(Option<PathBuf>),
    Edit(PathBuf),
    New,
    /// Options are accepted and ignored
    Set(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Not an editor command: {0}")]
    Unrecognized(String),
    #[error("Argument required: {0}")]
    MissingArgument(&'static str),
}

impl Command {
    /// Parse a command line (without its `:` marker).
    ///
    /// Tokens are split on whitespace; there is no quoting or escaping.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut parts = input.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Unrecognized(String::new()));
        };
        let arg = parts.next().map(PathBuf::from);

        match verb {
            "q" | "quit" => Ok(Command::Quit),
            "w" | "write" => Ok(Command::Write(arg)),
            "wq" | "writequit" => Ok(Command::WriteQuit(arg)),
            "e" | "edit" => arg
                .map(Command::Edit)
                .ok_or(CommandError::MissingArgument("edit")),
            "n" | "new" => Ok(Command::New),
            "set" => Ok(Command::Set(
                input.split_whitespace().skip(1).map(str::to_string).collect(),
            )),
            other => Err(CommandError::Unrecognized(other.to_string())),
        }
    }

    pub fn quits(&self) -> bool {
        matches!(self, Command::Quit | Command::WriteQuit(_))
    }
}
