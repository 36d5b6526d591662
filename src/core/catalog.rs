//! Scenario catalog.
//!
//! Holds the built-in exercises plus any JSON scenario files found in the
//! configured scenario directory. Every scenario is validated before it is added.

use crate::core::error::{Result, TrainerError};
use crate::core::scenario::Scenario;
use log::debug;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            scenarios: vec![Scenario::commit_exercise(), Scenario::merge_exercise()],
        }
    }

    pub fn add(&mut self, scenario: Scenario) -> Result<()> {
        if self.get(&scenario.id).is_some() {
            return Err(TrainerError::duplicate_scenario(&scenario.id));
        }
        scenario.validate()?;
        self.scenarios.push(scenario);
        Ok(())
    }

    /// Load every `*.json` file in `dir`, in file name order
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            debug!("Scenario directory {} does not exist", dir.display());
            return Ok(0);
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let content = std::fs::read_to_string(path)
                .map_err(|e| TrainerError::scenario_read_failed(path, e))?;
            let scenario: Scenario = serde_json::from_str(&content)
                .map_err(|e| TrainerError::scenario_parse_failed(path, e))?;
            debug!("Loaded scenario '{}' from {}", scenario.id, path.display());
            self.add(scenario)?;
        }

        Ok(paths.len())
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }

    pub fn find(&self, id: &str) -> Result<&Scenario> {
        self.get(id).ok_or_else(|| TrainerError::unknown_scenario(id))
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}
