// SyriaBiz - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::Language;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SyriaBiz configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/syriabiz/ or %APPDATA%\SyriaBiz\config\)
    pub config_dir: PathBuf,

    /// Data directory holding the default user catalog file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Default location of the user catalog file.
    pub fn default_user_catalog(&self) -> PathBuf {
        self.data_dir.join(constants::USER_CATALOG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[display]` section.
    pub display: DisplaySection,
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[display]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Start language: "ar" or "en".
    pub language: Option<String>,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// User catalog TOML file (empty = platform default location).
    pub user_catalog: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Language the session starts in.
    pub language: Language,
    /// User catalog file override.
    pub user_catalog: Option<PathBuf>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal problems.
/// If the file does not exist, returns defaults with no problems (first run).
/// If the file is unparseable, returns defaults and the parse error; the
/// application still starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            return (
                AppConfig::default(),
                vec![ConfigError::Io {
                    path: config_path,
                    source: e,
                }],
            )
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            return (
                AppConfig::default(),
                vec![ConfigError::TomlParse {
                    path: config_path,
                    source: e,
                }],
            )
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, problems) = validate(raw);
    if !problems.is_empty() {
        tracing::warn!(
            count = problems.len(),
            "Config validation produced warnings"
        );
    }
    (config, problems)
}

/// Check each field, accumulating every problem.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut problems = Vec::new();

    // -- Display: language --
    if let Some(ref lang) = raw.display.language {
        match Language::parse(lang) {
            Some(l) => config.language = l,
            None => problems.push(ConfigError::ValueOutOfRange {
                field: "display.language".to_string(),
                value: lang.clone(),
                expected: "\"ar\" or \"en\"".to_string(),
            }),
        }
    }

    // -- Catalog: user_catalog --
    if let Some(ref file) = raw.catalog.user_catalog {
        if !file.trim().is_empty() {
            config.user_catalog = Some(PathBuf::from(file.trim()));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, problems)
}
