use std::io;

use thiserror::Error;

/// Library-wide error type for hacsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file contains an invalid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file missing at an explicitly requested path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Integration domain does not match `[a-z0-9_]+`.
    #[error(
        "Invalid integration domain '{0}': must contain only lowercase letters, digits, or underscores"
    )]
    InvalidDomain(String),

    /// Repository coordinates could not be parsed.
    #[error("Invalid repository '{0}': expected owner/repository or a GitHub URL")]
    InvalidRepository(String),

    /// Requested artifact is not part of the bundle.
    #[error("Artifact '{name}' not found. Available: {available}")]
    ArtifactNotFound { name: String, available: String },

    /// Export target already holds bundle files.
    #[error("Bundle file already exists: {0} (use --force to overwrite)")]
    BundleExists(String),

    /// Embedded template failed to register or render.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// Feed lookup request failed. Absorbed at the discovery boundary.
    #[error("Feed discovery failed: {0}")]
    Discovery(String),

    /// Git repository inspection failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view so callers can classify failures without matching messages.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidDomain(_)
            | AppError::InvalidRepository(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) | AppError::ArtifactNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::BundleExists(_) => io::ErrorKind::AlreadyExists,
            AppError::TemplateRender { .. }
            | AppError::Discovery(_)
            | AppError::GitError { .. }
            | AppError::Json(_) => io::ErrorKind::Other,
        }
    }
}
