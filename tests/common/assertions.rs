//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-trainer command output and
//! interpreter results.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the unknown scenario error message
pub fn unknown_scenario(id: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Unknown scenario '{id}'"))
}

/// Creates a predicate that checks a prompt line for `branch`
pub fn has_prompt(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({branch}) $"))
}

/// Creates a predicate that checks for the commit graph section
pub fn has_graph() -> impl Predicate<str> {
    predicates::str::contains("Commit graph:")
}

/// Creates a predicate that checks for the success notification
pub fn has_success(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✓ {message}"))
}
