//! Configuration module
//!
//! Settings come from environment variables (optionally seeded from a `.env`
//! file by the binary). Every setting has a default so the application runs
//! from a checkout with the bundled `models/` directory.

use std::path::PathBuf;

const MODEL_DIR_ENV: &str = "HEARTWISE_MODEL_DIR";
const DETECTION_MODEL_ENV: &str = "HEARTWISE_DETECTION_MODEL";
const RISK_MODEL_ENV: &str = "HEARTWISE_RISK_MODEL";
const LOG_MODE_ENV: &str = "HEARTWISE_LOG_MODE";
const LOG_FILE_ENV: &str = "HEARTWISE_LOG_FILE";

const DEFAULT_MODEL_DIR: &str = "models";
const DETECTION_MODEL_FILE: &str = "heart_model.json";
const RISK_MODEL_FILE: &str = "heart_risk_model.json";
const DEFAULT_LOG_FILE: &str = "heartwise.log";

/// Where log output goes.
///
/// Writing logs to the terminal corrupts the TUI (alternate screen), so the
/// default sends logs to a file when stdout is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when interactive, stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Parse a mode name; unknown values fall back to `Auto`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Whether logs should go to a file given the terminal state.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Detection classifier artifact
    pub detection_model: PathBuf,

    /// Risk classifier artifact
    pub risk_model: PathBuf,

    pub log_mode: LogMode,

    /// Log file used when logging to a file
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let dir = PathBuf::from(DEFAULT_MODEL_DIR);
        Self {
            detection_model: dir.join(DETECTION_MODEL_FILE),
            risk_model: dir.join(RISK_MODEL_FILE),
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Individual model paths override the model directory.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let dir = non_empty(MODEL_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR));

        Self {
            detection_model: non_empty(DETECTION_MODEL_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| dir.join(DETECTION_MODEL_FILE)),
            risk_model: non_empty(RISK_MODEL_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| dir.join(RISK_MODEL_FILE)),
            log_mode: non_empty(LOG_MODE_ENV)
                .map(|v| LogMode::parse(&v))
                .unwrap_or_default(),
            log_file: non_empty(LOG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}
