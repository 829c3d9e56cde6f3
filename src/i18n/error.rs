//! Error types for the i18n module.

use std::path::PathBuf;
use thiserror::Error;

/// A language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language code: '{0}'")]
pub struct UnsupportedLanguage(pub String);

/// Failure to load a locale file.
///
/// The manager never propagates these: each one is logged and the affected
/// call proceeds with an empty dictionary.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Failed to load language file {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to request language file {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read language file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed language file {location}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to read or write the persisted preferences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access preferences file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode preferences")]
    Encode(#[from] serde_json::Error),
}
