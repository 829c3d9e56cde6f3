use anyhow::{Context, Result};

use crate::i18n::DEFAULT_LOCALE_PATH;

#[derive(Debug, Clone)]
pub struct Config {
    // Locales
    pub locale_base_url: String,

    // Persisted preferences
    pub preferences_file: String,

    // Page snapshot driven by the binary
    pub page_file: String,

    // Browser locale used when no preference is saved
    pub browser_language: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locale_base_url: std::env::var("LOCALE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_LOCALE_PATH.to_string()),

            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| ".navbar-i18n/preferences.json".to_string()),

            page_file: std::env::var("PAGE_FILE").context("PAGE_FILE not set")?,

            // BROWSER_LANGUAGE wins; otherwise the POSIX locale (e.g. "pt_BR.UTF-8")
            browser_language: std::env::var("BROWSER_LANGUAGE")
                .ok()
                .or_else(|| std::env::var("LANG").ok())
                .filter(|v| !v.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "LOCALE_BASE_URL",
        "PREFERENCES_FILE",
        "PAGE_FILE",
        "BROWSER_LANGUAGE",
        "LANG",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_page_file() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PAGE_FILE"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("PAGE_FILE", "page.json");

        let config = Config::from_env().expect("Should load");

        assert_eq!(config.page_file, "page.json");
        assert_eq!(config.locale_base_url, "./locales");
        assert_eq!(config.preferences_file, ".navbar-i18n/preferences.json");
        assert_eq!(config.browser_language, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_browser_language_precedence() {
        clear_env();
        std::env::set_var("PAGE_FILE", "page.json");
        std::env::set_var("LANG", "fr_FR.UTF-8");

        assert_eq!(
            Config::from_env().unwrap().browser_language.as_deref(),
            Some("fr_FR.UTF-8")
        );

        std::env::set_var("BROWSER_LANGUAGE", "en-US");
        assert_eq!(
            Config::from_env().unwrap().browser_language.as_deref(),
            Some("en-US")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PAGE_FILE", "page.json");
        std::env::set_var("LOCALE_BASE_URL", "https://cdn.example.com/locales");
        std::env::set_var("PREFERENCES_FILE", "/tmp/prefs.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.locale_base_url, "https://cdn.example.com/locales");
        assert_eq!(config.preferences_file, "/tmp/prefs.json");
        clear_env();
    }
}
