//! Locale file loading.
//!
//! Locale files live at `<base>/<code>.json`. The base is either an HTTP(S)
//! URL, fetched with reqwest, or a local directory read with `tokio::fs`.

use crate::i18n::{Language, LocaleError, TranslationDictionary};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Locale directory used when no valid base is configured.
pub const DEFAULT_LOCALE_PATH: &str = "./locales";

/// A directory base is accepted when it has at least one non-whitespace
/// character. Paths with spaces in them are fine.
fn locale_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S").expect("locale path regex is valid"))
}

/// Where locale files are loaded from.
#[derive(Debug, Clone)]
pub enum LocaleSource {
    Http {
        client: reqwest::Client,
        base_url: String,
    },
    Directory {
        path: PathBuf,
    },
}

impl LocaleSource {
    /// Build a source from a configured base.
    ///
    /// `http://` and `https://` bases are fetched over the network; anything
    /// else is treated as a directory path. An invalid URL or a blank base
    /// falls back to [`DEFAULT_LOCALE_PATH`].
    pub fn from_base(base: &str) -> Self {
        let base = base.trim();

        if base.starts_with("http://") || base.starts_with("https://") {
            match reqwest::Url::parse(base) {
                Ok(_) => return Self::http(reqwest::Client::new(), base),
                Err(e) => {
                    warn!(
                        "Invalid locale base URL '{}' ({}), using {}",
                        base, e, DEFAULT_LOCALE_PATH
                    );
                    return Self::directory(DEFAULT_LOCALE_PATH);
                }
            }
        }

        if locale_path_regex().is_match(base) {
            Self::directory(base)
        } else {
            warn!(
                "Invalid locale directory '{}', using {}",
                base, DEFAULT_LOCALE_PATH
            );
            Self::directory(DEFAULT_LOCALE_PATH)
        }
    }

    /// An HTTP source sharing an existing client.
    pub fn http(client: reqwest::Client, base_url: &str) -> Self {
        Self::Http {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory { path: path.into() }
    }

    /// Location of the locale file for `language`, for logging.
    pub fn location(&self, language: Language) -> String {
        match self {
            Self::Http { base_url, .. } => format!("{}/{}.json", base_url, language.code()),
            Self::Directory { path } => self.file_path(path, language).display().to_string(),
        }
    }

    fn file_path(&self, dir: &std::path::Path, language: Language) -> PathBuf {
        dir.join(format!("{}.json", language.code()))
    }

    /// Load and parse the locale file for `language`.
    pub async fn load(&self, language: Language) -> Result<TranslationDictionary, LocaleError> {
        let location = self.location(language);
        debug!("Loading language file {}", location);

        let body = match self {
            Self::Http { client, .. } => {
                let response = client.get(&location).send().await.map_err(|source| {
                    LocaleError::Transport {
                        url: location.clone(),
                        source,
                    }
                })?;

                if !response.status().is_success() {
                    return Err(LocaleError::Status {
                        url: location,
                        status: response.status(),
                    });
                }

                response
                    .text()
                    .await
                    .map_err(|source| LocaleError::Transport {
                        url: location.clone(),
                        source,
                    })?
            }
            Self::Directory { path } => {
                let file = self.file_path(path, language);
                tokio::fs::read_to_string(&file)
                    .await
                    .map_err(|source| LocaleError::Io { path: file, source })?
            }
        };

        TranslationDictionary::from_json(&body)
            .map_err(|source| LocaleError::Malformed { location, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== from_base Tests ====================

    #[test]
    fn test_from_base_http_trims_trailing_slash() {
        let source = LocaleSource::from_base("https://example.com/locales/");
        assert_eq!(
            source.location(Language::ENGLISH),
            "https://example.com/locales/en.json"
        );
    }

    #[test]
    fn test_from_base_directory() {
        let source = LocaleSource::from_base("./site/locales");
        assert!(matches!(source, LocaleSource::Directory { ref path } if path == &PathBuf::from("./site/locales")));
    }

    #[test]
    fn test_from_base_directory_with_spaces() {
        let source = LocaleSource::from_base("/srv/my site/locales");
        assert!(matches!(source, LocaleSource::Directory { ref path } if path == &PathBuf::from("/srv/my site/locales")));
    }

    #[test]
    fn test_from_base_blank_falls_back() {
        for base in ["", "   ", "\t\n"] {
            let source = LocaleSource::from_base(base);
            assert!(
                matches!(source, LocaleSource::Directory { ref path } if path == &PathBuf::from(DEFAULT_LOCALE_PATH)),
                "base {:?} should fall back",
                base
            );
        }
    }

    #[test]
    fn test_from_base_invalid_url_falls_back() {
        let source = LocaleSource::from_base("http://exa mple.com");
        assert!(matches!(source, LocaleSource::Directory { .. }));
    }

    // ==================== HTTP Tests ====================

    #[tokio::test]
    async fn test_load_http_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/locales/fr.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"greeting": "Bonjour"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = LocaleSource::from_base(&format!("{}/locales", mock_server.uri()));
        let dict = source.load(Language::FRENCH).await.expect("Should load");

        assert_eq!(dict.get("greeting"), Some("Bonjour"));
    }

    #[tokio::test]
    async fn test_load_http_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pt.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let source = LocaleSource::from_base(&mock_server.uri());
        let err = source.load(Language::PORTUGUESE).await.unwrap_err();

        assert!(matches!(err, LocaleError::Status { status, .. } if status.as_u16() == 404));
        assert!(err.to_string().contains("pt.json"));
    }

    #[tokio::test]
    async fn test_load_http_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let source = LocaleSource::from_base(&mock_server.uri());
        let err = source.load(Language::ENGLISH).await.unwrap_err();

        assert!(matches!(err, LocaleError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_load_http_connection_refused() {
        let mock_server = MockServer::builder().start().await;
        let base = format!("{}/locales", mock_server.uri());
        drop(mock_server);

        let source = LocaleSource::from_base(&base);
        let err = source.load(Language::ENGLISH).await.unwrap_err();

        assert!(matches!(err, LocaleError::Transport { ref url, .. } if url.ends_with("/locales/en.json")));
    }

    // ==================== Directory Tests ====================

    #[tokio::test]
    async fn test_load_directory_success() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("es.json"), r#"{"greeting": "Hola"}"#)
            .expect("Failed to write locale");

        let source = LocaleSource::directory(dir.path());
        let dict = source.load(Language::SPANISH).await.expect("Should load");

        assert_eq!(dict.get("greeting"), Some("Hola"));
    }

    #[tokio::test]
    async fn test_load_directory_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let source = LocaleSource::directory(dir.path());
        let err = source.load(Language::FRENCH).await.unwrap_err();

        assert!(matches!(err, LocaleError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_directory_with_spaces_in_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let locales = dir.path().join("my site").join("locales");
        std::fs::create_dir_all(&locales).expect("Failed to create locale dir");
        std::fs::write(locales.join("en.json"), r#"{"greeting": "Hi"}"#)
            .expect("Failed to write locale");

        let source = LocaleSource::from_base(&locales.display().to_string());
        let dict = source.load(Language::ENGLISH).await.expect("Should load");

        assert_eq!(dict.get("greeting"), Some("Hi"));
    }
}
