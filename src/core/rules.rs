//! Declarative rule table for scenario commands.
//!
//! A scenario is mostly a list of [`Rule`]s. Each rule names the subcommands it
//! handles, the [`Guard`]s that must all hold, the [`Effect`]s to apply and the
//! result template to log. Rules are tried in order and the first match wins.
//!
//! Rules are plain data and deserialize from JSON, so new exercises can be
//! written without touching the interpreter.

use crate::core::command_parser::ParsedCommand;
use crate::core::graph::GraphLog;
use crate::core::state::SessionState;
use serde::{Deserialize, Serialize};

/// Condition checked against the parsed command and the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "guard", content = "value", rename_all = "snake_case")]
pub enum Guard {
    ArgMissing,
    ArgEquals(String),
    ArgIn(Vec<String>),
    /// Argument names a branch that exists in the graph
    ArgIsBranch,
    ArgIsUnknownBranch,
    ArgIsCurrentBranch,
    MessageEmpty,
    Staged,
    NotStaged,
}

/// State change applied when a rule is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Stage,
    Unstage,
    /// Check out the branch named by the argument
    SwitchToArg,
    /// Commit on the current branch with the parsed message
    Commit,
    /// Merge the branch named by the argument into the current branch
    MergeArgIntoCurrent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub subcommands: Vec<String>,
    #[serde(default)]
    pub when: Vec<Guard>,
    pub verdict: Verdict,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Result template, see [`crate::core::templates`]
    pub result: String,
    /// Solves the exercise when applied
    #[serde(default)]
    pub completes: bool,
}

impl Rule {
    pub fn accept(subcommands: &[&str], result: impl Into<String>) -> Self {
        Self {
            subcommands: subcommands.iter().map(|s| s.to_string()).collect(),
            when: Vec::new(),
            verdict: Verdict::Accepted,
            effects: Vec::new(),
            result: result.into(),
            completes: false,
        }
    }

    pub fn reject(subcommands: &[&str], result: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Rejected,
            ..Self::accept(subcommands, result)
        }
    }

    pub fn when(mut self, guard: Guard) -> Self {
        self.when.push(guard);
        self
    }

    pub fn then(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn completing(mut self) -> Self {
        self.completes = true;
        self
    }

    pub fn handles(&self, sub: &str) -> bool {
        self.subcommands.iter().any(|s| s == sub)
    }

    pub fn matches(&self, command: &ParsedCommand, state: &SessionState, graph: &GraphLog) -> bool {
        self.handles(command.sub())
            && self
                .when
                .iter()
                .all(|guard| guard.holds(command, state, graph))
    }
}

impl Guard {
    pub fn holds(&self, command: &ParsedCommand, state: &SessionState, graph: &GraphLog) -> bool {
        let arg = command.arg.as_deref();
        match self {
            Guard::ArgMissing => arg.is_none(),
            Guard::ArgEquals(expected) => arg == Some(expected.as_str()),
            Guard::ArgIn(options) => arg.is_some_and(|arg| options.iter().any(|o| o == arg)),
            Guard::ArgIsBranch => arg.is_some_and(|arg| graph.has_branch(arg)),
            Guard::ArgIsUnknownBranch => arg.is_some_and(|arg| !graph.has_branch(arg)),
            Guard::ArgIsCurrentBranch => arg == Some(state.current_branch.as_str()),
            Guard::MessageEmpty => command.message.is_empty(),
            Guard::Staged => state.staged_changes,
            Guard::NotStaged => !state.staged_changes,
        }
    }
}

/// First rule in `rules` that matches, if any
pub fn first_match<'r>(
    rules: &'r [Rule],
    command: &ParsedCommand,
    state: &SessionState,
    graph: &GraphLog,
) -> Option<&'r Rule> {
    rules
        .iter()
        .find(|rule| rule.matches(command, state, graph))
}
