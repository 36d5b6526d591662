//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all git-trainer output,
//! ensuring consistent colors, spacing, and message structure across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors and rejections, green for success
//! - **Prompt-style transcript**: Each command is echoed after a `(branch) $` prompt
//! - **Lane colors**: Branch names use the color of their graph lane

use crate::core::colors::{get_colored_branch, get_verdict_style};
use crate::core::interpreter::Outcome;
use crate::core::layout::GraphLayout;
use crate::core::render::render_graph;
use crate::core::scenario::Scenario;
use crate::core::state::LogEntry;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
///
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// The interactive prompt, e.g. `(develop) $ `
pub fn format_prompt(branch: &str, lane: Option<usize>) -> String {
    format!("({}) {} ", get_colored_branch(lane, branch), "$".bright_black())
}

/// A transcript entry: the prompt and command on one line, the result below
pub fn format_log_entry(entry: &LogEntry, outcome: &Outcome, lane: Option<usize>) -> String {
    let paint = get_verdict_style(outcome.verdict);
    format!(
        "{}{}\n{}",
        format_prompt(&entry.branch, lane),
        entry.command.trim(),
        paint(outcome.result.as_str())
    )
}

pub fn print_graph(layout: &GraphLayout) {
    print_section_header("Commit graph");
    for line in render_graph(layout) {
        println!("  {line}");
    }
}

/// Prints the breadcrumb, problem statement and constraints of a scenario
pub fn print_problem(scenario: &Scenario) {
    println!("\n{}", scenario.category.bright_red());
    print_section_header("Problem");
    for line in &scenario.description {
        println!("  {}", line.white());
    }
    if !scenario.constraints.is_empty() {
        print_section_header("Constraints");
        for line in &scenario.constraints {
            println!("  {} {}", "•".bright_black(), line.white());
        }
    }
    println!();
}
