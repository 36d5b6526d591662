//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TrainerError`], the error type for system-level failures
//! in git-trainer: loading scenarios, validating graph events and reading configuration.
//!
//! Mistakes typed by the learner are never represented here. They are ordinary
//! rejection messages appended to the command log by the interpreter.
//!
//! # Public API
//! - [`TrainerError`]: Main error enum covering all failure modes
//! - [`GraphError`]: Violations of the commit graph invariants
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TrainerError>`

use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised by the graph model when an event would break its invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("the first graph event must create a root branch")]
    MissingRoot,

    #[error("a root branch already exists, '{name}' must name a parent")]
    RootAlreadyExists { name: String },

    #[error("branch '{name}' already exists")]
    DuplicateBranch { name: String },

    #[error("branch '{name}' does not exist")]
    UnknownBranch { name: String },

    #[error("cannot merge branch '{name}' into itself")]
    SelfMerge { name: String },
}

impl GraphError {
    pub fn unknown_branch(name: impl Into<String>) -> Self {
        Self::UnknownBranch { name: name.into() }
    }

    pub fn duplicate_branch(name: impl Into<String>) -> Self {
        Self::DuplicateBranch { name: name.into() }
    }
}

/// Domain-specific error types for git-trainer
#[derive(Error, Debug)]
pub enum TrainerError {
    // Scenario errors
    #[error("Unknown scenario '{id}'. Run 'git-trainer list' to see available exercises.")]
    UnknownScenario { id: String },

    #[error("Scenario '{id}' already exists")]
    DuplicateScenario { id: String },

    #[error("Scenario '{id}' has an invalid seed graph: {source}")]
    InvalidSeedGraph { id: String, source: GraphError },

    #[error("Scenario '{id}' starts on branch '{branch}' which is not in its seed graph")]
    UnknownInitialBranch { id: String, branch: String },

    #[error("Scenario '{id}' has no rules")]
    EmptyRuleTable { id: String },

    #[error("Failed to read scenario file '{path}': {source}")]
    ScenarioReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scenario file '{path}': {source}")]
    ScenarioParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read command script '{path}': {source}")]
    ScriptReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No commands provided. Usage: git-trainer run <scenario> \"git add .\" ...")]
    NoCommands,

    // Configuration errors
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Graph errors outside of a scenario context
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using TrainerError
pub type Result<T> = std::result::Result<T, TrainerError>;

impl TrainerError {
    /// Create an unknown scenario error
    pub fn unknown_scenario(id: impl Into<String>) -> Self {
        Self::UnknownScenario { id: id.into() }
    }

    /// Create a duplicate scenario error
    pub fn duplicate_scenario(id: impl Into<String>) -> Self {
        Self::DuplicateScenario { id: id.into() }
    }

    /// Create an invalid seed graph error
    pub fn invalid_seed_graph(id: impl Into<String>, source: GraphError) -> Self {
        Self::InvalidSeedGraph {
            id: id.into(),
            source,
        }
    }

    /// Create an unknown initial branch error
    pub fn unknown_initial_branch(id: impl Into<String>, branch: impl Into<String>) -> Self {
        Self::UnknownInitialBranch {
            id: id.into(),
            branch: branch.into(),
        }
    }

    /// Create a scenario read failed error
    pub fn scenario_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScenarioReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a scenario parse failed error
    pub fn scenario_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ScenarioParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a script read failed error
    pub fn script_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScriptReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
