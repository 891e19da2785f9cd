//! Error types for HomeView
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid fixture or input data
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Embedded asset is missing
    #[snafu(display("Missing embedded asset: {path}"))]
    MissingAsset { path: String },

    /// JSON deserialization error
    #[snafu(display("JSON error in {path}: {source}"))]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
