//! Session state owned by a running exercise.
//!
//! # Public API
//! - [`LogEntry`]: One submitted command with its result
//! - [`SessionState`]: Mutable state the interpreter reads and writes
//!
//! State lives only as long as the session that owns it. Nothing here is written
//! to disk.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub command: String,
    pub result: String,
    /// Branch that was checked out when the command was submitted
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_branch: String,
    pub staged_changes: bool,
    pub input_locked: bool,
    pub command_log: Vec<LogEntry>,
}

impl SessionState {
    pub fn new(current_branch: impl Into<String>) -> Self {
        Self {
            current_branch: current_branch.into(),
            staged_changes: false,
            input_locked: false,
            command_log: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, command: &str, result: String, branch: String) {
        self.command_log.push(LogEntry {
            command: command.to_string(),
            result,
            branch,
        });
    }
}
