use crate::core::error::{Result, TrainerError};
use std::path::PathBuf;

/// Override for the configuration directory, mainly for tests and packaging
pub const CONFIG_DIR_ENV: &str = "GIT_TRAINER_CONFIG_DIR";

pub fn get_config_directory() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join("git-trainer"))
        .ok_or(TrainerError::ConfigDirectoryNotFound)
}
