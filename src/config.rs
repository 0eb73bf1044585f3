//! Configuration handling for the TUI

use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// How long toasts stay on screen, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Directory the proof file dialog starts in
    pub proof_dir: Option<String>,
    /// Copy the JSON result to the clipboard after every successful submit
    pub copy_on_submit: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "regform", "regform-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location (platform data directory)
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("regform-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to the given file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn toast_duration(&self) -> Option<Duration> {
        self.toast_duration_ms.map(Duration::from_millis)
    }

    pub fn copy_on_submit(&self) -> bool {
        self.copy_on_submit.unwrap_or(false)
    }

    /// Text the proof dialog opens with: the configured directory, or the home
    /// directory, with a trailing separator so the user can type a file name.
    pub fn initial_proof_input(&self) -> String {
        let dir = self
            .proof_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| UserDirs::new().map(|d| d.home_dir().to_path_buf()));
        match dir {
            Some(dir) => {
                let mut s = dir.display().to_string();
                if !s.ends_with(std::path::MAIN_SEPARATOR) {
                    s.push(std::path::MAIN_SEPARATOR);
                }
                s
            }
            None => String::new(),
        }
    }

    /// Remember the directory of the last chosen proof file
    pub fn remember_proof_dir(&mut self, file: &Path) -> bool {
        let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return false;
        };
        let dir = parent.display().to_string();
        if self.proof_dir.as_deref() == Some(dir.as_str()) {
            return false;
        }
        self.proof_dir = Some(dir);
        true
    }
}
