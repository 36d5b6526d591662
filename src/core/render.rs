//! Text renderer for the commit graph.
//!
//! Draws a [`GraphLayout`] newest-first, one row per position that holds a node:
//!
//! ```text
//! M    master: Merge branch 'develop' into 'master'
//! | *  develop: Implement search api
//! * *  master: Refactor home page | develop: Build search box component
//! *    master: Initial commit
//! ```
//!
//! `*` is a commit, `M` a merge and `|` a lane that is alive but has no node in
//! that row.

use crate::core::colors::get_lane_color_style;
use crate::core::layout::{GraphLayout, NodeKind};

const LABEL_SEPARATOR: &str = " | ";

pub fn render_graph(layout: &GraphLayout) -> Vec<String> {
    let mut lines = Vec::new();

    for position in (0..=layout.height()).rev() {
        let mut row_nodes: Vec<_> = layout
            .nodes
            .iter()
            .filter(|node| node.position == position)
            .collect();
        row_nodes.sort_by_key(|node| node.lane);
        if row_nodes.is_empty() {
            continue;
        }

        let mut cells = Vec::with_capacity(layout.lanes.len());
        for lane in &layout.lanes {
            let paint = get_lane_color_style(lane.index);
            let symbol = match layout.node_at(lane.index, position) {
                Some(node) if node.kind == NodeKind::Merge => "M",
                Some(_) => "*",
                None if is_alive(layout, lane.index, position) => "|",
                None => " ",
            };
            cells.push(paint(symbol).to_string());
        }

        let labels: Vec<String> = row_nodes
            .iter()
            .map(|node| {
                let paint = get_lane_color_style(node.lane);
                let branch = &layout.lanes[node.lane].branch;
                format!("{}: {}", paint(branch.as_str()), node.label)
            })
            .collect();

        lines.push(format!("{}  {}", cells.join(" "), labels.join(LABEL_SEPARATOR)));
    }

    lines
}

/// Render without color codes
pub fn render_graph_plain(layout: &GraphLayout) -> Vec<String> {
    render_graph(layout)
        .iter()
        .map(|line| strip_ansi_codes(line))
        .collect()
}

fn is_alive(layout: &GraphLayout, lane: usize, position: usize) -> bool {
    let start = layout.lanes[lane].start;
    match layout.tip(lane) {
        Some(tip) => start < position && position <= tip,
        None => false,
    }
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
