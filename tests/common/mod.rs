//! Consolidated test utilities for git-trainer
//!
//! This module provides unified testing utilities for integration tests:
//! isolated configuration directories, scripted sessions and output predicates.

pub mod assertions;
pub mod fixtures;
