//! Unified color system for branches and command results.
//!
//! # Public API
//! - [`get_lane_color_style`]: Color function for a graph lane
//! - [`get_colored_branch`]: Branch name in its lane color
//! - [`get_verdict_style`]: Color function for an accepted or rejected result
//!
//! # Color Scheme
//! - **Lanes**: green, cyan, magenta, yellow, blue, repeating
//! - **Accepted results**: white
//! - **Rejected results**: red

use crate::core::rules::Verdict;
use colored::*;

const LANE_COLORS: [Color; 5] = [
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
];

/// Returns a closure that colors text in the color of `lane`
pub fn get_lane_color_style(lane: usize) -> Box<dyn Fn(&str) -> ColoredString> {
    let color = LANE_COLORS[lane % LANE_COLORS.len()];
    Box::new(move |text: &str| text.color(color))
}

pub fn get_colored_branch(lane: Option<usize>, name: &str) -> ColoredString {
    match lane {
        Some(lane) => get_lane_color_style(lane)(name).bold(),
        None => name.bold(),
    }
}

pub fn get_verdict_style(verdict: Verdict) -> Box<dyn Fn(&str) -> ColoredString> {
    match verdict {
        Verdict::Accepted => Box::new(|text: &str| text.white()),
        Verdict::Rejected => Box::new(|text: &str| text.red()),
    }
}
