//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading resume or portfolio data files.
#[derive(Debug, Error)]
pub enum ResumeDataError {
    #[error("Failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse data TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failures while loading or validating the export configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

/// Failures raised while laying out or encoding the PDF.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Font loading or rendering failed: {0}")]
    Genpdf(#[from] genpdf::error::Error),
    #[error("PDF encoding failed: {0}")]
    Pdf(String),
    #[error("Invalid export configuration: {0}")]
    Config(#[from] ConfigError),
    #[cfg(feature = "bookmarks")]
    #[error("Failed to embed section outline: {0}")]
    Outline(#[from] crate::bookmarks::BookmarkError),
}

/// Failures raised while handing the finished artifact to the user.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Blob URL {0} is unknown or already revoked")]
    UnknownBlob(String),
    #[error("Delivery surface unavailable: {0}")]
    Unavailable(String),
}

/// The two failure kinds of the export path.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to generate resume PDF")]
    Generation(#[from] GenerationError),
    #[error("Failed to deliver resume PDF")]
    Delivery(#[from] DeliveryError),
}
