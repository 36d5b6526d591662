//! Append-only commit graph model.
//!
//! The graph is a log of [`GraphEvent`]s in the order they happened. Renderers
//! replay the whole log every time it changes, so events are never removed or
//! reordered.
//!
//! [`GraphLog::append`] checks every event against the branches introduced so
//! far and refuses anything that would leave the log inconsistent.

use crate::core::error::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single change to the commit graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GraphEvent {
    /// A new branch; `from` is `None` only for the root branch
    BranchCreated { name: String, from: Option<String> },
    CommitAdded { branch: String, message: String },
    Merged { from: String, to: String },
}

impl GraphEvent {
    pub fn root(name: impl Into<String>) -> Self {
        Self::BranchCreated {
            name: name.into(),
            from: None,
        }
    }

    pub fn branch(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self::BranchCreated {
            name: name.into(),
            from: Some(from.into()),
        }
    }

    pub fn commit(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CommitAdded {
            branch: branch.into(),
            message: message.into(),
        }
    }

    pub fn merge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Merged {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphLog {
    events: Vec<GraphEvent>,
    branches: HashSet<String>,
}

impl GraphLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log by appending `events` in order
    pub fn from_events<I>(events: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = GraphEvent>,
    {
        let mut log = Self::new();
        for event in events {
            log.append(event)?;
        }
        Ok(log)
    }

    /// Check that `event` could be appended without changing the log
    pub fn validate(&self, event: &GraphEvent) -> Result<(), GraphError> {
        match event {
            GraphEvent::BranchCreated { name, from: None } => {
                if self.events.is_empty() {
                    Ok(())
                } else {
                    Err(GraphError::RootAlreadyExists { name: name.clone() })
                }
            }
            _ if self.events.is_empty() => Err(GraphError::MissingRoot),
            GraphEvent::BranchCreated {
                name,
                from: Some(parent),
            } => {
                if self.has_branch(name) {
                    Err(GraphError::duplicate_branch(name))
                } else {
                    self.require_branch(parent)
                }
            }
            GraphEvent::CommitAdded { branch, .. } => self.require_branch(branch),
            GraphEvent::Merged { from, to } => {
                self.require_branch(from)?;
                self.require_branch(to)?;
                if from == to {
                    return Err(GraphError::SelfMerge { name: from.clone() });
                }
                Ok(())
            }
        }
    }

    pub fn append(&mut self, event: GraphEvent) -> Result<(), GraphError> {
        self.validate(&event)?;
        if let GraphEvent::BranchCreated { name, .. } = &event {
            self.branches.insert(name.clone());
        }
        self.events.push(event);
        Ok(())
    }

    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.contains(name)
    }

    /// Branch names in creation order
    pub fn branch_names(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GraphEvent::BranchCreated { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn require_branch(&self, name: &str) -> Result<(), GraphError> {
        if self.has_branch(name) {
            Ok(())
        } else {
            Err(GraphError::unknown_branch(name))
        }
    }
}
