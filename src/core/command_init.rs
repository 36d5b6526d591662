//! Centralized initialization for scenario commands.
//!
//! This module provides [`ScenarioCommandInit`] which handles the setup shared by
//! every subcommand that works with exercises (list, play, run, graph).
//!
//! # Initialization Steps
//! 1. **Configuration**: Load `config.json`, falling back to defaults
//! 2. **Colors**: Apply the configured color preference
//! 3. **Catalog**: Built-in exercises plus scenario files from the scenario directory

use crate::core::{
    catalog::Catalog,
    config::TrainerConfig,
    error::Result,
    session::Session,
};

/// Initialization context for scenario commands
#[derive(Debug)]
pub struct ScenarioCommandContext {
    pub config: TrainerConfig,
    pub catalog: Catalog,
}

impl ScenarioCommandContext {
    /// Start a fresh session for the scenario named `id`
    pub fn open_session(&self, id: &str) -> Result<Session> {
        let scenario = self.catalog.find(id)?.clone();
        Session::with_success_message(scenario, &self.config.success_message)
    }
}

pub struct ScenarioCommandInit;

impl ScenarioCommandInit {
    pub fn initialize() -> Result<ScenarioCommandContext> {
        let config = TrainerConfig::load_or_create()?;
        Self::initialize_with_config(config)
    }

    pub fn initialize_with_config(config: TrainerConfig) -> Result<ScenarioCommandContext> {
        if !config.color {
            colored::control::set_override(false);
        }

        let mut catalog = Catalog::builtin();
        let scenario_dir = config.scenario_dir()?;
        let loaded = catalog.load_dir(&scenario_dir)?;
        log::debug!(
            "Catalog ready with {} scenarios ({} from {})",
            catalog.scenarios().len(),
            loaded,
            scenario_dir.display()
        );

        Ok(ScenarioCommandContext { config, catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TrainerError;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> TrainerConfig {
        TrainerConfig {
            scenario_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_with_empty_scenario_dir() {
        let dir = TempDir::new().unwrap();
        let context = ScenarioCommandInit::initialize_with_config(config_in(&dir)).unwrap();
        assert_eq!(context.catalog.scenarios().len(), 2);
    }

    #[test]
    fn test_open_session_uses_configured_message() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.success_message = "Solved".to_string();
        let context = ScenarioCommandInit::initialize_with_config(config).unwrap();

        let session = context.open_session("commit").unwrap();
        assert_eq!(session.notification().message, "Solved");
        assert!(matches!(
            context.open_session("stash"),
            Err(TrainerError::UnknownScenario { .. })
        ));
    }
}
