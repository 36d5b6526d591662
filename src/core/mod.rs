//! Core functionality for the git-trainer tool.
//!
//! This module provides the command interpreter, the commit graph model, the
//! scenario descriptors and the terminal presentation helpers.

pub mod catalog;
pub mod colors;
pub mod command_init;
pub mod command_parser;
pub mod config;
pub mod dirs;
pub mod error;
pub mod graph;
pub mod interpreter;
pub mod layout;
pub mod notification;
pub mod output;
pub mod render;
pub mod rules;
pub mod scenario;
pub mod session;
pub mod state;
pub mod templates;

// === Error handling ===
pub use error::{GraphError, Result, TrainerError};

// === Graph model ===
// Append-only event log and the lane layout derived from it
pub use graph::{GraphEvent, GraphLog};
pub use layout::{Edge, GraphLayout, Lane, Node, NodeKind};

// === Interpreter ===
pub use command_parser::{CommandParser, ParsedCommand};
pub use interpreter::{interpret, Outcome};
pub use rules::{Effect, Guard, Rule, Verdict};

// === Sessions and scenarios ===
pub use catalog::Catalog;
pub use notification::Notification;
pub use scenario::Scenario;
pub use session::{Session, SessionObserver, SessionSnapshot};
pub use state::{LogEntry, SessionState};

// === Configuration ===
pub use command_init::{ScenarioCommandContext, ScenarioCommandInit};
pub use config::TrainerConfig;

// === Output formatting ===
pub use output::{
    format_log_entry, format_prompt, print_error, print_graph, print_info, print_problem,
    print_section_header, print_success,
};
pub use render::{render_graph, render_graph_plain, strip_ansi_codes};
pub use templates::{render_template, TemplateContext};
