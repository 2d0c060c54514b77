//! Word list and checker options.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::checker;

/// Mapping from a word to its correct translation.
///
/// An empty vocabulary can be built; the checker rejects it at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: BTreeMap<String, String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, returning the translation it replaced, if any.
    pub fn insert(&mut self, word: impl Into<String>, translation: impl Into<String>) -> Option<String> {
        self.words.insert(word.into(), translation.into())
    }

    /// Correct translation for `word`.
    pub fn translation(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, translation)` pairs in word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(w, t)| (w.as_str(), t.as_str()))
    }

    /// Case-sensitive check of `answer` for `word`.
    ///
    /// # Panics
    ///
    /// Panics if the vocabulary is empty or does not contain `word`.
    pub fn check(&self, word: &str, answer: &str) -> bool {
        self.check_with(word, answer, CheckOptions::default())
    }

    /// Check of `answer` for `word` with explicit options.
    ///
    /// # Panics
    ///
    /// Panics if the vocabulary is empty or does not contain `word`.
    pub fn check_with(&self, word: &str, answer: &str, options: CheckOptions) -> bool {
        checker::check(self, word, answer, options.case_sensitive)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Vocabulary {
    fn from(words: BTreeMap<String, String>) -> Self {
        Self { words }
    }
}

impl<S> From<HashMap<String, String, S>> for Vocabulary {
    fn from(words: HashMap<String, String, S>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }
}

/// Options for the answer checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    pub case_sensitive: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl CheckOptions {
    /// Options that ignore letter case.
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_iter_collects_pairs() {
        let vocab = Vocabulary::from_iter([("geel", "yellow"), ("rood", "red")]);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.translation("geel"), Some("yellow"));
        assert_eq!(vocab.translation("blauw"), None);
    }

    #[test]
    fn iter_is_sorted_by_word() {
        let vocab = Vocabulary::from_iter([("rood", "red"), ("geel", "yellow")]);
        let pairs: Vec<_> = vocab.iter().collect();
        assert_eq!(pairs, vec![("geel", "yellow"), ("rood", "red")]);
    }

    #[test]
    fn from_hash_map() {
        let mut map = HashMap::new();
        map.insert("geel".to_string(), "yellow".to_string());
        let vocab = Vocabulary::from(map);
        assert!(vocab.contains("geel"));
    }

    #[test]
    fn insert_replaces_translation() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.insert("geel", "yelow"), None);
        assert_eq!(vocab.insert("geel", "yellow"), Some("yelow".to_string()));
        assert_eq!(vocab.translation("geel"), Some("yellow"));
    }

    #[test]
    fn serializes_as_json_object() {
        let vocab = Vocabulary::from_iter([("geel", "yellow")]);
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"{"geel":"yellow"}"#);
    }

    #[test]
    fn options_default_to_case_sensitive() {
        assert!(CheckOptions::default().case_sensitive);
        let options: CheckOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CheckOptions::default());
        let options: CheckOptions = serde_json::from_str(r#"{"case_sensitive": false}"#).unwrap();
        assert_eq!(options, CheckOptions::case_insensitive());
    }

    #[test]
    fn method_check_uses_options() {
        let vocab = Vocabulary::from_iter([("Nederland", "Netherlands")]);
        assert!(!vocab.check("Nederland", "netherlands"));
        assert!(vocab.check_with("Nederland", "netherlands", CheckOptions::case_insensitive()));
    }
}
