//! Git Trainer - interactive terminal exercises for learning git.
//!
//! The learner types git commands into a simulator. A small interpreter checks
//! each command against the rules of the current exercise, answers with a
//! git-like message and records commits and merges in a commit graph that is
//! drawn in the terminal.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - [`Session`]: a running exercise that accepts typed commands
//! - [`Scenario`] and [`Rule`]: declarative exercise descriptions
//! - [`GraphLog`] and [`GraphLayout`]: the commit graph and its lane layout
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    interpret,
    render_graph_plain,

    Catalog,
    CommandParser,
    Effect,
    // Graph model
    GraphError,
    GraphEvent,
    GraphLayout,
    GraphLog,
    Guard,
    LogEntry,
    Notification,
    Outcome,
    ParsedCommand,
    Result,
    Rule,
    // Scenarios and sessions
    Scenario,
    Session,
    SessionObserver,
    SessionState,
    // Error handling
    TrainerError,
    Verdict,
};
