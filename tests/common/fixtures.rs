//! Test data generation utilities and predefined scenarios
//!
//! Provides isolated configuration directories and helpers that drive a
//! session through a list of commands.

#![allow(dead_code)]

use assert_cmd::Command;
use git_trainer::core::config::TrainerConfig;
use git_trainer::core::dirs::CONFIG_DIR_ENV;
use git_trainer::{Outcome, Scenario, Session};
use std::path::Path;
use tempfile::TempDir;

pub const SUCCESS_MESSAGE: &str = "Correct!";

/// Creates a configuration directory with colors disabled and a known
/// success message. The TempDir must be kept alive for the whole test.
pub fn setup_config_dir() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    let config = TrainerConfig {
        success_message: SUCCESS_MESSAGE.to_string(),
        color: false,
        ..Default::default()
    };
    config.save_to(&dir.path().join("config.json"))?;
    Ok(dir)
}

/// A `git-trainer` command that reads its configuration from `config_dir`
pub fn trainer_cmd(config_dir: &Path) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("git-trainer")?;
    cmd.env(CONFIG_DIR_ENV, config_dir).env("NO_COLOR", "1");
    Ok(cmd)
}

/// Starts a session and submits `inputs` in order
pub fn run_session(scenario: Scenario, inputs: &[&str]) -> anyhow::Result<(Session, Vec<Outcome>)> {
    let mut session = Session::new(scenario)?;
    let outcomes = inputs.iter().map(|input| session.submit(input)).collect();
    Ok((session, outcomes))
}
