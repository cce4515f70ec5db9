//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Entry errors
//! - 3xx: Config errors
//! - 4xx: Query errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `EntryNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Entry errors (1xx)
    // ========================================
    /// E101: No knowledge entry with the requested id
    EntryNotFound,
    /// E102: Entry failed to decode from storage or input
    EntryInvalid,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Query errors (4xx)
    // ========================================
    /// E401: Identification query carried no usable input
    QueryInvalid,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Record store could not be opened or queried
    StoreUnavailable,
    /// E605: Serialization/deserialization failed
    SerializationError,
    /// E606: Bulk import failed
    ImportFailed,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E801: Entry validation rules failed
    ValidationFailed,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `EntryNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::EntryNotFound => 101,
            Self::EntryInvalid => 102,
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,
            Self::QueryInvalid => 401,
            Self::StoreUnavailable => 601,
            Self::SerializationError => 605,
            Self::ImportFailed => 606,
            Self::ValidationFailed => 801,
            Self::InternalError => 901,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::EntryNotFound => "Run `proclens search <keyword>` to find the entry id",
            Self::EntryInvalid => "The stored entry could not be decoded. Re-import it with `proclens import`",
            Self::ConfigInvalid => "Check TOML syntax and value types in the config file",
            Self::ConfigMissingRequired => "Set the missing value in config.toml or via its PROCLENS_* variable",
            Self::QueryInvalid => "Pass at least one of --name, --exe or --publisher",
            Self::StoreUnavailable => "Check that the database path is readable and not locked by another process",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::ImportFailed => "Check that the import file is a JSON array of entries",
            Self::ValidationFailed => "Entries need a non-empty name and short description",
            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::EntryNotFound
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::QueryInvalid
            | Self::StoreUnavailable
            | Self::ImportFailed
            | Self::ValidationFailed
            | Self::IoError => true,
            Self::EntryInvalid | Self::SerializationError | Self::InternalError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "entry",
            3 => "config",
            4 => "query",
            6 => "storage",
            8 => "validation",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::EntryNotFound,
            Self::EntryInvalid,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::QueryInvalid,
            Self::StoreUnavailable,
            Self::SerializationError,
            Self::ImportFailed,
            Self::ValidationFailed,
            Self::InternalError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
