use crate::core::format::{DEFAULT_TIME_INPUT_FORMATS, FormatSpec, check_pattern};
use crate::errors::{AppError, AppResult};
use crate::models::encoded_time::Decoded;
use crate::models::shortcut::{ShortcutEntry, default_entries};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Accepted time input patterns; the first one is used for rendering.
    #[serde(default = "default_time_input_formats")]
    pub time_input_formats: Vec<String>,
    #[serde(default = "default_entries")]
    pub shortcuts: Vec<ShortcutEntry>,
    #[serde(default = "default_field_slots")]
    pub field_slots: usize,
}

fn default_time_input_formats() -> Vec<String> {
    DEFAULT_TIME_INPUT_FORMATS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_field_slots() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_input_formats: default_time_input_formats(),
            shortcuts: default_entries(),
            field_slots: default_field_slots(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeshortcuts")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timeshortcuts")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeshortcuts.conf")
    }

    /// Resolve the `--config` override, falling back to the standard path.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(PathBuf::from).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default configuration to `path`. In test mode nothing is
    /// written; the defaults are only returned.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Self::default();
        if !is_test {
            config.save_to(path)?;
        }
        Ok(config)
    }

    pub fn format_spec(&self) -> AppResult<FormatSpec> {
        FormatSpec::new(self.time_input_formats.iter().cloned())
    }

    /// Inspect the configuration for problems. Nothing here is fatal: bad
    /// shortcut codes still render, just not as a sensible time.
    pub fn check(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        match self.time_input_formats.first() {
            None => warnings.push("time_input_formats is empty".to_string()),
            Some(primary) => {
                if let Err(e) = check_pattern(primary) {
                    warnings.push(e.to_string());
                }
            }
        }

        if self.shortcuts.is_empty() {
            warnings.push("no shortcuts configured".to_string());
        }

        if self.field_slots == 0 {
            warnings.push("field_slots is 0: no field can receive a shortcut".to_string());
        }

        for (i, entry) in self.shortcuts.iter().enumerate() {
            if !entry.code.raw().is_finite() {
                warnings.push(format!(
                    "shortcut #{} '{}' has a non-numeric code ({})",
                    i, entry.label, entry.code
                ));
                continue;
            }
            if let Decoded::At(time) = entry.code.decode()
                && !time.is_valid()
            {
                warnings.push(format!(
                    "shortcut #{} '{}' (code {}) decodes to {}",
                    i, entry.label, entry.code, time
                ));
            }
        }

        warnings
    }
}
