//! Shell command parsing.
//!
//! A line splits on its first run of whitespace into a command token and an
//! argument string; the argument keeps its internal whitespace. Only the token
//! is matched case-insensitively.

use std::fmt;

pub const HELP_TEXT: &str = concat!(
    "Available commands:\n",
    "  help                 - Show this help message\n",
    "  create <filename>    - Create a new file\n",
    "  open <filename>      - Open a file in editor\n",
    "  list                 - List all files\n",
    "  ai <question>        - Ask AI for coding help\n",
    "  run <filename>       - Simulate running a file\n",
    "  delete <filename>    - Delete a file\n",
    "  clear                - Clear terminal",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub token: &'a str,
    pub arg: &'a str,
}

pub fn split_line(line: &str) -> ParsedLine<'_> {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(idx) => ParsedLine {
            token: &line[..idx],
            arg: line[idx..].trim_start(),
        },
        None => ParsedLine {
            token: line,
            arg: "",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List,
    Create(String),
    Open(String),
    Delete(String),
    Run(String),
    Ai(String),
    Clear,
    Unknown(String),
}

impl ShellCommand {
    /// Argument presence is checked here; existence checks happen against state.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let ParsedLine { token, arg } = split_line(line);
        let arg = arg.to_string();
        let needs_arg = |cmd: fn(String) -> ShellCommand, usage: Usage| {
            if arg.is_empty() {
                Err(CommandError::MissingArgument(usage))
            } else {
                Ok(cmd(arg.clone()))
            }
        };

        match token.to_lowercase().as_str() {
            "help" => Ok(ShellCommand::Help),
            "list" => Ok(ShellCommand::List),
            "clear" => Ok(ShellCommand::Clear),
            "create" => needs_arg(ShellCommand::Create, Usage::Create),
            "open" => needs_arg(ShellCommand::Open, Usage::Open),
            "delete" => needs_arg(ShellCommand::Delete, Usage::Delete),
            "run" => needs_arg(ShellCommand::Run, Usage::Run),
            "ai" => needs_arg(ShellCommand::Ai, Usage::Ai),
            _ => Ok(ShellCommand::Unknown(token.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShellCommand::Help => "help",
            ShellCommand::List => "list",
            ShellCommand::Create(_) => "create",
            ShellCommand::Open(_) => "open",
            ShellCommand::Delete(_) => "delete",
            ShellCommand::Run(_) => "run",
            ShellCommand::Ai(_) => "ai",
            ShellCommand::Clear => "clear",
            ShellCommand::Unknown(token) => token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Create,
    Open,
    Delete,
    Run,
    Ai,
}

impl Usage {
    pub fn syntax(self) -> &'static str {
        match self {
            Usage::Create => "create <filename>",
            Usage::Open => "open <filename>",
            Usage::Delete => "delete <filename>",
            Usage::Run => "run <filename>",
            Usage::Ai => "ai <your question>",
        }
    }
}

/// User-input validation failures. Each renders as one system message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    MissingArgument(Usage),
    AlreadyExists(String),
    NotFound(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument(usage) => write!(f, "Usage: {}", usage.syntax()),
            CommandError::AlreadyExists(name) => write!(f, "Error: File \"{}\" already exists", name),
            CommandError::NotFound(name) => write!(f, "Error: File \"{}\" not found", name),
        }
    }
}

impl std::error::Error for CommandError {}

pub fn unknown_command_message(token: &str) -> String {
    format!("Unknown command: {token}. Type \"help\" for available commands.")
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/command.rs"]
mod tests;
