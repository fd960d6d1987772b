//! Error types for the server binary.
//!
//! [`ServerBinError`] wraps every failure mode during startup and
//! serving so `main` can propagate with `?`.

/// Top-level error for the server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerBinError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crushsim_core::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: crushsim_api::ServerError,
    },

    /// The logging subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the logging failure.
        message: String,
    },
}
