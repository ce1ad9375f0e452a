// SyriaBiz - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SyriaBiz";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SyriaBiz";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Opening hours
// =============================================================================

/// Earliest hour a business may open or close.
pub const MIN_HOUR: u8 = 0;

/// Latest hour a business may close. 24 means "midnight at the end of the day".
pub const MAX_HOUR: u8 = 24;

/// Default opening hour offered by the add-business form.
pub const DEFAULT_OPEN_HOUR: u8 = 9;

/// Default closing hour offered by the add-business form.
pub const DEFAULT_CLOSE_HOUR: u8 = 17;

// =============================================================================
// Records
// =============================================================================

/// Image used when a new record is submitted without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/400/300";

/// Maximum number of records accepted from a user catalog file.
pub const MAX_USER_RECORDS: usize = 1_000;

/// Maximum size of a user catalog TOML file in bytes.
pub const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default user catalog file name, looked up in the platform data directory.
pub const USER_CATALOG_FILE_NAME: &str = "catalog.toml";
