//! Error types for the pastebin-fetch application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Login errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    // Listing errors
    #[error("Paste listing failed: {0}")]
    Lookup(String),

    #[error("No paste with title '{0}' could be found")]
    PasteNotFound(String),

    // Raw fetch errors
    #[error("Fetching raw paste failed: {0}")]
    Fetch(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Parse errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure category a run terminates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Lookup,
    Fetch,
    Io,
}

impl ErrorCategory {
    /// Process exit code for this category.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Configuration => exit_codes::CONFIG_ERROR,
            ErrorCategory::Authentication => exit_codes::AUTH_ERROR,
            ErrorCategory::Lookup => exit_codes::LOOKUP_ERROR,
            ErrorCategory::Fetch => exit_codes::FETCH_ERROR,
            ErrorCategory::Io => exit_codes::IO_ERROR,
        }
    }
}

impl Error {
    /// Classify this error into the stage category it belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::TomlParse(_)
            | Error::UrlParse(_) => ErrorCategory::Configuration,
            Error::Authentication(_) => ErrorCategory::Authentication,
            Error::Lookup(_) | Error::PasteNotFound(_) => ErrorCategory::Lookup,
            Error::Fetch(_) => ErrorCategory::Fetch,
            Error::InvalidFilename(_) | Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }
}

/// Process exit codes, one per failure category.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const AUTH_ERROR: i32 = 3;
    pub const LOOKUP_ERROR: i32 = 4;
    pub const FETCH_ERROR: i32 = 5;
    pub const IO_ERROR: i32 = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_has_distinct_exit_code() {
        let codes = [
            Error::MissingConfig("developer_key".into()).exit_code(),
            Error::Authentication("HTTP 500".into()).exit_code(),
            Error::PasteNotFound("GCODE".into()).exit_code(),
            Error::Fetch("HTTP 404".into()).exit_code(),
            Error::InvalidFilename("../x".into()).exit_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, exit_codes::SUCCESS);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_exit_codes_are_category_codes() {
        let declared = [
            exit_codes::CONFIG_ERROR,
            exit_codes::AUTH_ERROR,
            exit_codes::LOOKUP_ERROR,
            exit_codes::FETCH_ERROR,
            exit_codes::IO_ERROR,
        ];
        let categories = [
            ErrorCategory::Configuration,
            ErrorCategory::Authentication,
            ErrorCategory::Lookup,
            ErrorCategory::Fetch,
            ErrorCategory::Io,
        ];

        for (category, code) in categories.iter().zip(declared) {
            assert_eq!(category.exit_code(), code);
        }
    }

    #[test]
    fn test_lookup_variants_share_category() {
        assert_eq!(
            Error::Lookup("bad xml".into()).category(),
            Error::PasteNotFound("GCODE".into()).category()
        );
    }

    #[test]
    fn test_io_error_category() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), exit_codes::IO_ERROR);
    }
}
