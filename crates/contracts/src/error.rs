//! Unified error definitions
//!
//! Categorized by source: configuration / secret file / database / registry.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum SensorError {
    // ===== Configuration Errors =====
    /// Required attribute absent or not convertible
    #[error("configuration error: {message}")]
    Configuration { message: String },

    // ===== Secret File Errors =====
    /// Secret file could not be opened, parsed, or lacks the requested key
    #[error("secret resolution error for '{}': {message}", path.display())]
    SecretResolution { path: PathBuf, message: String },

    // ===== Database Errors =====
    /// Connection or query failure
    #[error("database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Usage ratio guard: `count / limit` is undefined for a zero limit
    #[error("usage is undefined when limit is zero")]
    ZeroLimit,

    // ===== Registry Errors =====
    /// No factory registered under the requested model id
    #[error("no model registered under '{model}'")]
    ModelNotFound { model: String },

    /// A factory is already registered under this model id
    #[error("model '{model}' is already registered")]
    DuplicateModel { model: String },
}

impl SensorError {
    /// Create configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create secret resolution error
    pub fn secret_resolution(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SecretResolution {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create database error without source
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create database error wrapping a driver error
    pub fn database_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Unified result alias
pub type Result<T> = std::result::Result<T, SensorError>;
