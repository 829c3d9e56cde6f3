//! Language registry: Single source of truth for all supported page languages.
//!
//! The registry is an immutable table built once with `OnceLock`. Its order is
//! the order in which languages are reported to callers (es, en, pt, fr).

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "es", "en", "pt", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español", "Français")
    pub native_name: &'static str,

    /// Whether this language is used when neither a saved preference nor the
    /// browser locale resolves to a supported language (only one should be true)
    pub is_fallback: bool,
}

/// Global language registry.
///
/// Holds the closed set of languages the page can be translated into. It is
/// initialized on first access and never mutated afterwards.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: `"ES"` or `"es-MX"` are not supported codes.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the fallback language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one fallback language
    /// (this indicates a configuration error in `default_languages`).
    pub fn fallback(&self) -> &LanguageConfig {
        let fallback_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_fallback)
            .collect();

        match fallback_langs.len() {
            0 => panic!("No fallback language found in registry"),
            1 => fallback_langs[0],
            _ => panic!("Multiple fallback languages found in registry"),
        }
    }
}

/// Default language configurations.
///
/// Spanish is the fallback language of the site.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_fallback: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_fallback: false,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            is_fallback: false,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_fallback: false,
        },
    ]
}
