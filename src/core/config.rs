use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, TrainerError};
use crate::core::session::DEFAULT_SUCCESS_MESSAGE;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrainerConfig {
    /// Text of the notification shown when an exercise is solved
    pub success_message: String,
    /// Redraw the commit graph after every command that changes it
    pub show_graph: bool,
    pub color: bool,
    /// Extra scenario descriptors, defaults to `<config dir>/scenarios`
    pub scenario_dir: Option<PathBuf>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            show_graph: true,
            color: true,
            scenario_dir: None,
        }
    }
}

impl TrainerConfig {
    /// Load `config.json` from the config directory, writing the defaults there
    /// on first run
    pub fn load_or_create() -> Result<Self> {
        let config_file = get_config_directory()?.join("config.json");
        Self::load_or_create_at(&config_file)
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        debug!("No config at {}, writing defaults", path.display());
        let config = Self::default();
        if let Err(e) = config.save_to(path) {
            warn!("Could not write default config (continuing with defaults): {e}");
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TrainerError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| TrainerError::config_parse_failed(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn scenario_dir(&self) -> Result<PathBuf> {
        match &self.scenario_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(get_config_directory()?.join("scenarios")),
        }
    }
}
