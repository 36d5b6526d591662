//! Terminal front end for a session.
//!
//! [`TerminalObserver`] prints what the core reports: each command result, the
//! redrawn graph after every change and the success notification.

use crate::core::{
    format_log_entry, print_graph, print_success, GraphEvent, GraphLayout, LogEntry,
    Notification, Outcome, SessionObserver,
};
use crate::core::colors::get_verdict_style;

pub struct TerminalObserver {
    /// Echo the prompt and command before each result
    echo: bool,
    show_graph: bool,
    layout: GraphLayout,
}

impl TerminalObserver {
    pub fn new(echo: bool, show_graph: bool, layout: GraphLayout) -> Self {
        Self {
            echo,
            show_graph,
            layout,
        }
    }
}

impl SessionObserver for TerminalObserver {
    fn on_log_entry(&mut self, entry: &LogEntry, outcome: &Outcome) {
        if self.echo {
            let lane = self.layout.lane_of(&entry.branch);
            println!("{}", format_log_entry(entry, outcome, lane));
        } else {
            let paint = get_verdict_style(outcome.verdict);
            println!("{}", paint(outcome.result.as_str()));
        }
    }

    fn on_graph_changed(&mut self, events: &[GraphEvent]) {
        self.layout = GraphLayout::compute(events);
        if self.show_graph {
            print_graph(&self.layout);
        }
    }

    fn on_success(&mut self, notification: &Notification) {
        print_success(&notification.message);
    }
}
