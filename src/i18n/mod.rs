//! Internationalization (i18n) module for page translations.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages
//! - `language`: Validated `Language` type
//! - `dictionary`: Translation dictionaries and the session cache
//! - `source`: Locale file loading over HTTP or from a directory
//! - `storage`: Persisted language preference
//! - `metrics`: Cache and fetch counters
//! - `manager`: `LanguageManager`, which ties the above to a page
//!
//! # Example
//!
//! ```rust,ignore
//! use navbar_i18n::i18n::{LanguageManager, LocaleSource, MemoryPreferenceStore};
//!
//! let manager = LanguageManager::new(
//!     LocaleSource::from_base("https://example.com/locales"),
//!     MemoryPreferenceStore::new(),
//!     page,
//!     Some("en-US"),
//! );
//! manager.update_language_translations("fr").await;
//! ```

mod dictionary;
mod error;
mod language;
mod manager;
mod metrics;
mod registry;
mod source;
mod storage;

pub use dictionary::{TranslationCache, TranslationDictionary};
pub use error::{LocaleError, StorageError, UnsupportedLanguage};
pub use language::Language;
pub use manager::LanguageManager;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use source::{LocaleSource, DEFAULT_LOCALE_PATH};
pub use storage::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, LANGUAGE_PREFERENCE_KEY,
};
