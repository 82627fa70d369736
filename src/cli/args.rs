//! CLI argument definitions for `omsplanner`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use oms_planner::config::ConfigOverrides;
use oms_planner::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Plan selection flags shared by the `plan`, `share encode`, and `report`
/// commands. Omitted flags fall back to the configured defaults (or to the
/// decoded share link when `--from-url` is given).
#[derive(Debug, Default, Args)]
pub struct PlanArgs {
    /// Program key (omsa, omscs, omscsec)
    #[arg(long, value_name = "KEY")]
    pub program: Option<String>,

    /// Start-term key (e.g., spring-2026)
    #[arg(long, value_name = "KEY")]
    pub start: Option<String>,

    /// Pacing mode (constant or mixed)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Constant-mode credits per term
    #[arg(long, value_name = "CREDITS")]
    pub pace: Option<u32>,

    /// Mixed-mode rows as comma-separated TERMSxCREDITS tokens (e.g., "2x3,2x6,1x3")
    #[arg(long, value_name = "ROWS")]
    pub mixed: Option<String>,

    /// Hydrate the plan from a share link (URL or bare query string)
    #[arg(long, value_name = "LINK")]
    pub from_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `program`, `pace`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ShareSubcommand {
    /// Build a share link for a plan configuration.
    Encode {
        /// Plan selection flags
        #[command(flatten)]
        plan: PlanArgs,

        /// Base URL to build the link against (defaults to config `base_url`)
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },
    /// Decode a share link and display the plan configuration it carries.
    Decode {
        /// Share link (URL or bare query string)
        #[arg(value_name = "LINK")]
        link: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Estimate the cost of a single term.
    Term {
        /// Credits enrolled for the term
        #[arg(value_name = "CREDITS")]
        credits: f64,

        /// Program key (omsa, omscs, omscsec); defaults to config `program`
        #[arg(long, value_name = "KEY")]
        program: Option<String>,
    },
    /// Compare the constant pacing options for a program.
    Pace {
        /// Program key (omsa, omscs, omscsec); defaults to config `program`
        #[arg(long, value_name = "KEY")]
        program: Option<String>,

        /// Start-term key (e.g., spring-2026); defaults to config `start_term`
        #[arg(long, value_name = "KEY")]
        start: Option<String>,
    },
    /// Compute a full degree plan and print its summary and timeline.
    Plan {
        /// Plan selection flags
        #[command(flatten)]
        plan: PlanArgs,

        /// Also print a share link for this plan
        #[arg(long)]
        share: bool,
    },
    /// Encode or decode share links.
    Share {
        #[command(subcommand)]
        subcommand: ShareSubcommand,
    },
    /// Generate a plan report (markdown or html).
    Report {
        /// Plan selection flags
        #[command(flatten)]
        plan: PlanArgs,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "omsplanner",
    about = "Online graduate tuition planner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default program
    #[arg(long = "config-program", value_name = "KEY")]
    pub config_program: Option<String>,

    /// Override config default start term
    #[arg(long = "config-start-term", value_name = "KEY")]
    pub config_start_term: Option<String>,

    /// Override config default pace
    #[arg(long = "config-pace", value_name = "CREDITS")]
    pub config_pace: Option<u32>,

    /// Override config default pacing mode
    #[arg(long = "config-mode", value_name = "MODE")]
    pub config_mode: Option<String>,

    /// Override config share base URL
    #[arg(long = "config-base-url", value_name = "URL")]
    pub config_base_url: Option<String>,

    /// Override config share base URL (short form)
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--base-url`) take precedence
    /// over long-form flags (e.g., `--config-base-url`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            program: self.config_program.clone(),
            start_term: self.config_start_term.clone(),
            pace: self.config_pace,
            mode: self.config_mode.clone(),
            base_url: self
                .base_url
                .clone()
                .or_else(|| self.config_base_url.clone()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
