//! Error types for jobscout.
//!
//! Detection itself never fails: a missing field is an empty string and a
//! negative classification is `false`. Errors come from loading site profile
//! tables and from the application store.

/// Error type for configuration and storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A site profile table is structurally invalid.
    #[error("Invalid site profile: {0}")]
    InvalidProfile(String),

    /// A CSS selector in a rule or guard does not compile.
    #[error("Invalid CSS selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The offending selector text.
        selector: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A URL matcher regex does not compile.
    #[error("Invalid URL pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// JSON (de)serialization of a profile table or store document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the store file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No application exists with the given id.
    #[error("Application not found: {0}")]
    NotFound(String),

    /// A status string is not one of applied/interview/rejected/ghosted.
    #[error("Unknown application status: {0}")]
    InvalidStatus(String),
}

/// Result type alias for jobscout operations.
pub type Result<T> = std::result::Result<T, Error>;
