//! Language type: validated page language.
//!
//! A `Language` can only be built from a code that the registry knows, so
//! every value of this type is a member of the supported set.

use crate::i18n::{LanguageConfig, LanguageRegistry, UnsupportedLanguage};
use std::fmt;

/// A validated page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "es", "en")
    code: &'static str,
}

impl Language {
    pub const SPANISH: Language = Language { code: "es" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const PORTUGUESE: Language = Language { code: "pt" };
    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is one of the supported codes
    /// * `Err(UnsupportedLanguage)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_code("fr")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, UnsupportedLanguage> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }

    /// Resolve a browser/OS locale tag such as `"en-US"` or `"pt_BR.UTF-8"`
    /// to a supported language by its primary subtag.
    ///
    /// Returns `None` when the primary subtag is not supported.
    pub fn from_locale_tag(tag: &str) -> Option<Language> {
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Language::from_code(&primary).ok()
    }

    /// The language used when nothing else resolves.
    pub fn fallback() -> Language {
        Language {
            code: LanguageRegistry::get().fallback().code,
        }
    }

    /// All supported languages in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
