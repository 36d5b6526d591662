//! Tokenizer for typed simulator commands.
//!
//! This module provides [`CommandParser`] which splits a raw input line into the
//! positional tokens the interpreter dispatches on, and extracts the commit message
//! given with `-m`.
//!
//! # Public API
//! - [`ParsedCommand`]: Tokens of a single input line
//! - [`CommandParser`]: Stateless parser producing [`ParsedCommand`]
//!
//! # Grammar
//! - **Positional tokens**: `<main> <sub> <arg>`, split on runs of whitespace
//! - **Message**: everything after the first `-m`, trimmed, with surrounding quotes removed
//! - **Leniency**: missing tokens are `None`, extra tokens are ignored

/// Tokens of a single input line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    pub main: String,
    pub sub: Option<String>,
    pub arg: Option<String>,
    /// Commit message, empty when no `-m` flag was given
    pub message: String,
}

impl ParsedCommand {
    pub fn sub(&self) -> &str {
        self.sub.as_deref().unwrap_or_default()
    }

    pub fn arg(&self) -> &str {
        self.arg.as_deref().unwrap_or_default()
    }
}

const MESSAGE_FLAG: &str = "-m";
const QUOTES: &[char] = &['"', '\''];

/// Stateless tokenizer for simulator input
pub struct CommandParser;

impl CommandParser {
    /// Split a raw input line into positional tokens and a commit message
    ///
    /// # Examples
    /// ```
    /// use git_trainer::core::command_parser::CommandParser;
    ///
    /// let parsed = CommandParser::parse("  git commit -m \"first change\" ");
    /// assert_eq!(parsed.main, "git");
    /// assert_eq!(parsed.sub(), "commit");
    /// assert_eq!(parsed.arg(), "-m");
    /// assert_eq!(parsed.message, "first change");
    /// ```
    pub fn parse(input: &str) -> ParsedCommand {
        let mut tokens = input.split_whitespace();

        ParsedCommand {
            main: tokens.next().unwrap_or_default().to_string(),
            sub: tokens.next().map(str::to_string),
            arg: tokens.next().map(str::to_string),
            message: Self::extract_message(input),
        }
    }

    /// Extract the text following the first `-m`, without surrounding quotes
    pub fn extract_message(input: &str) -> String {
        match input.find(MESSAGE_FLAG) {
            Some(index) => input[index + MESSAGE_FLAG.len()..]
                .trim()
                .trim_matches(QUOTES)
                .trim()
                .to_string(),
            None => String::new(),
        }
    }
}
