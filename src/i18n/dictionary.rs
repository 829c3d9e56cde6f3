//! Translation dictionaries and the per-session dictionary cache.

use crate::i18n::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Key to localized text mapping for one language.
///
/// Deserialized from a top-level JSON object of strings. Values may contain
/// HTML fragments since they are written directly into rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    entries: HashMap<String, String>,
}

impl TranslationDictionary {
    /// An empty dictionary, used when a locale file could not be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a locale file body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Look up the localized text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Dictionaries that were loaded successfully, by language.
///
/// Grows monotonically: entries are never evicted, and the first dictionary
/// stored for a language is the one that stays.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<Language, Arc<TranslationDictionary>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, language: Language) -> Option<Arc<TranslationDictionary>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&language)
            .cloned()
    }

    /// Store a dictionary unless one is already cached for `language`.
    ///
    /// Returns the dictionary that is cached after the call, which is the
    /// earlier one when two loads for the same language race.
    pub fn insert(
        &self,
        language: Language,
        dictionary: TranslationDictionary,
    ) -> Arc<TranslationDictionary> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries
            .entry(language)
            .or_insert_with(|| Arc::new(dictionary))
            .clone()
    }

    pub fn contains(&self, language: Language) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(&language)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Dictionary Tests ====================

    #[test]
    fn test_from_json_object() {
        let dict = TranslationDictionary::from_json(r#"{"greeting": "Hola", "nav.home": "<b>Inicio</b>"}"#)
            .expect("Should parse");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("greeting"), Some("Hola"));
        assert_eq!(dict.get("nav.home"), Some("<b>Inicio</b>"));
        assert_eq!(dict.get("farewell"), None);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(TranslationDictionary::from_json(r#"["Hola"]"#).is_err());
        assert!(TranslationDictionary::from_json("not json").is_err());
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        assert!(TranslationDictionary::from_json(r#"{"count": 3}"#).is_err());
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = TranslationDictionary::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.get("anything"), None);
    }

    // ==================== Cache Tests ====================

    #[test]
    fn test_cache_starts_empty() {
        let cache = TranslationCache::new();
        assert!(cache.is_empty());
        assert!(cache.get(Language::ENGLISH).is_none());
    }

    #[test]
    fn test_cache_insert_and_get() {
        let cache = TranslationCache::new();
        let dict: TranslationDictionary = [("greeting", "Hello")].into_iter().collect();

        cache.insert(Language::ENGLISH, dict.clone());

        assert!(cache.contains(Language::ENGLISH));
        assert!(!cache.contains(Language::FRENCH));
        assert_eq!(cache.get(Language::ENGLISH).as_deref(), Some(&dict));
    }

    #[test]
    fn test_cache_first_insert_wins() {
        let cache = TranslationCache::new();
        let first: TranslationDictionary = [("greeting", "Bonjour")].into_iter().collect();
        let second: TranslationDictionary = [("greeting", "Salut")].into_iter().collect();

        cache.insert(Language::FRENCH, first.clone());
        let stored = cache.insert(Language::FRENCH, second);

        assert_eq!(*stored, first);
        assert_eq!(cache.len(), 1);
    }
}
