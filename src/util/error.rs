// SyriaBiz - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SyriaBiz operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DirectoryError {
    /// A submitted record failed validation.
    Validation(ValidationError),

    /// Catalog loading or mutation failed.
    Catalog(CatalogError),

    /// Export of a listing failed.
    Export(ExportError),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// The field was empty or whitespace only.
    Missing,

    /// The field should hold an integer but did not.
    NotANumber { value: String },

    /// The hour lies outside the 0-24 range.
    OutOfRange { value: i64 },

    /// The value is not one of the recognised choices (category, city).
    UnknownChoice { value: String },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is required"),
            Self::NotANumber { value } => write!(f, "'{value}' is not a whole number"),
            Self::OutOfRange { value } => write!(
                f,
                "{value} is out of range ({}-{})",
                super::constants::MIN_HOUR,
                super::constants::MAX_HOUR
            ),
            Self::UnknownChoice { value } => write!(f, "'{value}' is not a recognised choice"),
        }
    }
}

/// One rejected field of a submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Form field name (e.g. "name_ar").
    pub field: &'static str,
    pub problem: FieldProblem,
}

/// A record was rejected. Carries every offending field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Names of all rejected fields, in form order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|i| i.field).collect()
    }

    /// Returns true if `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("'{}' {}", i.field, i.problem))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for DirectoryError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors related to catalog loading and mutation.
#[derive(Debug)]
pub enum CatalogError {
    /// A catalog TOML document could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A record in a catalog document failed validation.
    InvalidRecord {
        path: PathBuf,
        id: u64,
        source: ValidationError,
    },

    /// A record with this id is already in the catalog.
    DuplicateId { id: u64 },

    /// Catalog file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Catalog file holds more records than allowed.
    TooManyRecords { count: usize, max: usize },

    /// I/O error reading a catalog file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::InvalidRecord { path, id, source } => write!(
                f,
                "Catalog '{}': record {id} is invalid: {source}",
                path.display()
            ),
            Self::DuplicateId { id } => {
                write!(f, "A business with id {id} is already in the catalog")
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Catalog '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::TooManyRecords { count, max } => {
                write!(f, "Catalog holds {count} records, maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading catalog '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::InvalidRecord { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for DirectoryError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export.
    Io {
        destination: String,
        source: io::Error,
    },

    /// CSV serialisation error.
    Csv {
        destination: String,
        source: csv::Error,
    },

    /// JSON serialisation error.
    Json {
        destination: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                destination,
                source,
            } => write!(f, "Export I/O error '{destination}': {source}"),
            Self::Csv {
                destination,
                source,
            } => write!(f, "CSV export error '{destination}': {source}"),
            Self::Json {
                destination,
                source,
            } => write!(f, "JSON export error '{destination}': {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for DirectoryError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for SyriaBiz results.
pub type Result<T> = std::result::Result<T, DirectoryError>;
