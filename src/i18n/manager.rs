//! Language manager: current page language, dictionary cache and translation
//! of tagged page elements.
//!
//! One manager is built per page session and shared through `Arc` with the
//! listeners that change the language. Locks are held only for short
//! synchronous sections and never across the locale fetch, so concurrent
//! updates interleave freely: the last accepted language wins and every
//! completed fetch fills the cache.

use crate::i18n::storage::LANGUAGE_PREFERENCE_KEY;
use crate::i18n::{
    Language, LocaleSource, PreferenceStore, TranslationCache, TranslationDictionary,
    TranslationMetrics,
};
use crate::page::SharedPage;
use crate::selectors::HTML_LANGUAGE_TRANSLATION_ATTRIBUTE;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, info, warn};

pub struct LanguageManager {
    current: RwLock<Language>,
    cache: TranslationCache,
    source: LocaleSource,
    store: Box<dyn PreferenceStore>,
    document: SharedPage,
    metrics: TranslationMetrics,
}

impl LanguageManager {
    /// Build a manager for `document`.
    ///
    /// The initial language is the saved preference when it is supported,
    /// else the primary subtag of `browser_locale` when supported, else the
    /// fallback language (Spanish).
    pub fn new(
        source: LocaleSource,
        store: impl PreferenceStore + 'static,
        document: SharedPage,
        browser_locale: Option<&str>,
    ) -> Self {
        let current = initial_language(&store, browser_locale);
        info!("Page language initialized to {}", current);

        Self {
            current: RwLock::new(current),
            cache: TranslationCache::new(),
            source,
            store: Box::new(store),
            document,
            metrics: TranslationMetrics::new(),
        }
    }

    pub fn current_language(&self) -> Language {
        *self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The supported languages in display order. The returned vector is a
    /// fresh copy.
    pub fn supported_languages(&self) -> Vec<Language> {
        Language::all()
    }

    /// Make `candidate` the current language if it is supported, and persist
    /// it as the preferred language.
    ///
    /// Returns `false` and leaves all state untouched for unsupported codes.
    pub fn set_language_specification(&self, candidate: &str) -> bool {
        self.set_language(candidate).is_some()
    }

    fn set_language(&self, candidate: &str) -> Option<Language> {
        let language = match Language::from_code(candidate) {
            Ok(language) => language,
            Err(e) => {
                debug!("Rejected language change: {}", e);
                return None;
            }
        };

        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = language;

        if let Err(e) = self.store.set(LANGUAGE_PREFERENCE_KEY, language.code()) {
            warn!("Failed to persist preferred language {}: {}", language, e);
        }

        Some(language)
    }

    /// Switch the page to `candidate` and translate every tagged element.
    ///
    /// The language is validated and persisted before its locale file is
    /// loaded, so a supported language stays current even when loading fails.
    /// An unsupported candidate leaves the language unchanged and re-applies
    /// the current one.
    ///
    /// Resolves to `true` only when `candidate` is supported and at least one
    /// element changed.
    pub async fn update_language_translations(&self, candidate: &str) -> bool {
        let accepted = self.set_language(candidate);
        let language = accepted.unwrap_or_else(|| self.current_language());

        let dictionary = self.language_translation(language).await;
        let changed = self.apply_translation(&dictionary);

        accepted.is_some() && changed
    }

    /// Re-apply the current language.
    pub async fn refresh_translations(&self) -> bool {
        let language = self.current_language();
        self.update_language_translations(language.code()).await
    }

    /// Cached dictionary for `language`, loading it on a miss.
    ///
    /// A failed load is logged and yields an empty dictionary for this call
    /// only; nothing is cached, so the next call tries again.
    async fn language_translation(&self, language: Language) -> Arc<TranslationDictionary> {
        if let Some(dictionary) = self.cache.get(language) {
            self.metrics.record_cache_hit();
            return dictionary;
        }

        self.metrics.record_cache_miss();
        self.metrics.record_fetch();

        match self.source.load(language).await {
            Ok(dictionary) => {
                info!(
                    "Loaded {} translations for {}",
                    dictionary.len(),
                    language.name()
                );
                self.cache.insert(language, dictionary)
            }
            Err(e) => {
                self.metrics.record_fetch_failure();
                error!("{}", error_chain(&e));
                Arc::new(TranslationDictionary::empty())
            }
        }
    }

    /// Rewrite the content of every tagged element whose key has a non-empty
    /// translation that differs from what is shown.
    ///
    /// Returns whether any element changed.
    fn apply_translation(&self, dictionary: &TranslationDictionary) -> bool {
        let mut page = self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut changed = 0;
        for element in page.elements_with_attribute_mut(HTML_LANGUAGE_TRANSLATION_ATTRIBUTE) {
            let translation = element
                .get_attribute(HTML_LANGUAGE_TRANSLATION_ATTRIBUTE)
                .and_then(|key| dictionary.get(key));

            if let Some(text) = translation {
                if !text.is_empty() && element.content != text {
                    element.content = text.to_string();
                    changed += 1;
                }
            }
        }

        if changed > 0 {
            debug!("Translated {} elements", changed);
        }
        self.metrics.record_elements_translated(changed);
        changed > 0
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub fn document(&self) -> &SharedPage {
        &self.document
    }
}

fn initial_language(store: &dyn PreferenceStore, browser_locale: Option<&str>) -> Language {
    let saved = store.get(LANGUAGE_PREFERENCE_KEY).and_then(|code| {
        Language::from_code(&code)
            .map_err(|e| warn!("Ignoring saved language preference: {}", e))
            .ok()
    });

    saved
        .or_else(|| browser_locale.and_then(Language::from_locale_tag))
        .unwrap_or_else(Language::fallback)
}

/// Display an error followed by its sources.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
