//! A running exercise.
//!
//! [`Session`] owns the scenario, its [`SessionState`], the [`GraphLog`] and the
//! success [`Notification`]. Front ends submit input through [`Session::submit`]
//! and receive changes through the [`SessionObserver`] trait.

use crate::core::error::Result;
use crate::core::graph::{GraphEvent, GraphLog};
use crate::core::interpreter::{interpret, Outcome};
use crate::core::layout::GraphLayout;
use crate::core::notification::Notification;
use crate::core::scenario::Scenario;
use crate::core::state::{LogEntry, SessionState};
use log::info;
use serde::Serialize;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Correct! 🥳";

/// Receives session changes. Every method has an empty default.
pub trait SessionObserver {
    /// Called once per submitted command
    fn on_log_entry(&mut self, _entry: &LogEntry, _outcome: &Outcome) {}

    /// Called with the full event log whenever an event was appended
    fn on_graph_changed(&mut self, _events: &[GraphEvent]) {}

    /// Called when the exercise has just been solved
    fn on_success(&mut self, _notification: &Notification) {}
}

pub struct Session {
    scenario: Scenario,
    state: SessionState,
    graph: GraphLog,
    notification: Notification,
    observers: Vec<Box<dyn SessionObserver>>,
}

/// Serializable view of a session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub scenario: &'a str,
    pub solved: bool,
    pub state: &'a SessionState,
    pub events: &'a [GraphEvent],
    pub layout: GraphLayout,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("scenario", &self.scenario.id)
            .field("state", &self.state)
            .field("events", &self.graph.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Session {
    pub fn new(scenario: Scenario) -> Result<Self> {
        Self::with_success_message(scenario, DEFAULT_SUCCESS_MESSAGE)
    }

    pub fn with_success_message(scenario: Scenario, message: impl Into<String>) -> Result<Self> {
        let (state, graph) = scenario.start()?;
        info!(
            "Starting '{}' on branch '{}' with {} seed events",
            scenario.id,
            state.current_branch,
            graph.len()
        );
        Ok(Self {
            scenario,
            state,
            graph,
            notification: Notification::new(message),
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Interpret one line of input and notify observers
    pub fn submit(&mut self, input: &str) -> Outcome {
        let outcome = interpret(&self.scenario, &mut self.state, &mut self.graph, input);

        if outcome.solved {
            info!("Scenario '{}' solved", self.scenario.id);
            self.notification.show();
        }

        let Some(entry) = self.state.command_log.last() else {
            return outcome;
        };
        for observer in &mut self.observers {
            observer.on_log_entry(entry, &outcome);
            if outcome.event.is_some() {
                observer.on_graph_changed(self.graph.events());
            }
            if outcome.solved {
                observer.on_success(&self.notification);
            }
        }

        outcome
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn graph(&self) -> &GraphLog {
        &self.graph
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn is_solved(&self) -> bool {
        self.state.input_locked
    }

    pub fn layout(&self) -> GraphLayout {
        GraphLayout::compute(self.graph.events())
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            scenario: &self.scenario.id,
            solved: self.is_solved(),
            state: &self.state,
            events: self.graph.events(),
            layout: self.layout(),
        }
    }
}
