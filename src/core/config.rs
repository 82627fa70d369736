//! Configuration module for `oms-planner`

use crate::core::models::{Program, PACE_OPTIONS};
use crate::core::share::PaceMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Default plan selections used when a command omits the matching flag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default program key (e.g., "omscs")
    #[serde(default)]
    pub program: String,
    /// Default start-term key (e.g., "spring-2026")
    #[serde(default)]
    pub start_term: String,
    /// Default constant pace in credits per term
    #[serde(default)]
    pub pace: u32,
    /// Default pacing mode ("constant" or "mixed")
    #[serde(default)]
    pub mode: String,
}

/// Share-link configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL share links are built against
    #[serde(default)]
    pub base_url: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated plan reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Plan default settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Share-link settings
    #[serde(default)]
    pub share: ShareConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override default program key
    pub program: Option<String>,
    /// Override default start-term key
    pub start_term: Option<String>,
    /// Override default pace
    pub pace: Option<u32>,
    /// Override default pacing mode
    pub mode: Option<String>,
    /// Override share base URL
    pub base_url: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$OMS_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/omsplanner`
    /// - macOS: `~/Library/Application Support/omsplanner`
    /// - Windows: `%APPDATA%\omsplanner`
    #[must_use]
    pub fn get_planner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("omsplanner")
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_planner_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    /// Returns true if any fields were added
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.defaults.program.is_empty() && !defaults.defaults.program.is_empty() {
            self.defaults.program.clone_from(&defaults.defaults.program);
            changed = true;
        }
        if self.defaults.start_term.is_empty() && !defaults.defaults.start_term.is_empty() {
            self.defaults
                .start_term
                .clone_from(&defaults.defaults.start_term);
            changed = true;
        }
        if self.defaults.pace == 0 && defaults.defaults.pace != 0 {
            self.defaults.pace = defaults.defaults.pace;
            changed = true;
        }
        if self.defaults.mode.is_empty() && !defaults.defaults.mode.is_empty() {
            self.defaults.mode.clone_from(&defaults.defaults.mode);
            changed = true;
        }

        if self.share.base_url.is_empty() && !defaults.share.base_url.is_empty() {
            self.share.base_url.clone_from(&defaults.share.base_url);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Expand `$OMS_PLANNER` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$OMS_PLANNER") {
            let planner_dir = Self::get_planner_dir();
            value.replace("$OMS_PLANNER", planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Apply CLI overrides to this config (in memory only)
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(program) = &overrides.program {
            self.defaults.program.clone_from(program);
        }
        if let Some(start_term) = &overrides.start_term {
            self.defaults.start_term.clone_from(start_term);
        }
        if let Some(pace) = overrides.pace {
            self.defaults.pace = pace;
        }
        if let Some(mode) = &overrides.mode {
            self.defaults.mode.clone_from(mode);
        }
        if let Some(base_url) = &overrides.base_url {
            self.share.base_url.clone_from(base_url);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "program" => Some(self.defaults.program.clone()),
            "start_term" => Some(self.defaults.start_term.clone()),
            "pace" => Some(self.defaults.pace.to_string()),
            "mode" => Some(self.defaults.mode.clone()),
            "base_url" => Some(self.share.base_url.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "program" => {
                if Program::from_key(value).is_none() {
                    return Err(format!("Unknown program key: '{value}'"));
                }
                self.defaults.program = value.to_string();
            }
            "start_term" => self.defaults.start_term = value.to_string(),
            "pace" => {
                let pace = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid pace value: '{value}'"))?;
                if !PACE_OPTIONS.contains(&pace) {
                    return Err(format!(
                        "Pace must be one of {PACE_OPTIONS:?} credits per term"
                    ));
                }
                self.defaults.pace = pace;
            }
            "mode" => {
                if PaceMode::from_key(value).is_none() {
                    return Err(format!("Mode must be 'constant' or 'mixed', got '{value}'"));
                }
                self.defaults.mode = value.to_string();
            }
            "base_url" => self.share.base_url = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "program" => self.defaults.program.clone_from(&defaults.defaults.program),
            "start_term" => self
                .defaults
                .start_term
                .clone_from(&defaults.defaults.start_term),
            "pace" => self.defaults.pace = defaults.defaults.pace,
            "mode" => self.defaults.mode.clone_from(&defaults.defaults.mode),
            "base_url" => self.share.base_url.clone_from(&defaults.share.base_url),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[defaults]")?;
        writeln!(f, "  program = \"{}\"", self.defaults.program)?;
        writeln!(f, "  start_term = \"{}\"", self.defaults.start_term)?;
        writeln!(f, "  pace = {}", self.defaults.pace)?;
        writeln!(f, "  mode = \"{}\"", self.defaults.mode)?;

        writeln!(f, "\n[share]")?;
        writeln!(f, "  base_url = \"{}\"", self.share.base_url)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert_eq!(config.defaults.program, "omscs");
        assert_eq!(config.defaults.start_term, "spring-2026");
        assert_eq!(config.defaults.pace, 6);
        assert_eq!(config.defaults.mode, "constant");
        assert!(!config.share.base_url.is_empty());
    }

    #[test]
    fn test_set_rejects_invalid_domain_values() {
        let mut config = Config::from_defaults();
        assert!(config.set("program", "mba").is_err());
        assert!(config.set("pace", "7").is_err());
        assert!(config.set("pace", "six").is_err());
        assert!(config.set("mode", "turbo").is_err());
        assert!(config.set("verbose", "maybe").is_err());
        assert!(config.set("nonsense", "x").is_err());
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut config = Config::from_defaults();
        config.set("program", "omsa").unwrap();
        config.set("pace", "9").unwrap();
        config.set("mode", "mixed").unwrap();

        assert_eq!(config.get("program").as_deref(), Some("omsa"));
        assert_eq!(config.get("pace").as_deref(), Some("9"));
        assert_eq!(config.get("mode").as_deref(), Some("mixed"));
        assert!(config.get("nonsense").is_none());
    }

    #[test]
    fn test_unset_restores_defaults() {
        let defaults = Config::from_defaults();
        let mut config = Config::from_defaults();
        config.set("program", "omscsec").unwrap();
        config.unset("program", &defaults).unwrap();
        assert_eq!(config.defaults.program, defaults.defaults.program);
        assert!(config.unset("nonsense", &defaults).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::from_defaults();
        config.apply_overrides(&ConfigOverrides {
            level: Some("debug".to_string()),
            pace: Some(3),
            base_url: Some("https://example.edu".to_string()),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.defaults.pace, 3);
        assert_eq!(config.share.base_url, "https://example.edu");
    }

    #[test]
    fn test_merge_defaults_fills_missing_fields() {
        let defaults = Config::from_defaults();
        let mut sparse = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();
        assert!(sparse.merge_defaults(&defaults));
        assert_eq!(sparse.logging.level, "info");
        assert_eq!(sparse.defaults.program, defaults.defaults.program);
        assert_eq!(sparse.defaults.pace, defaults.defaults.pace);
    }
}
