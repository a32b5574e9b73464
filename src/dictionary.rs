//! The word dictionary service, mapping words to meanings over a
//! [`BalancedMap`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    definition::DefinitionSource,
    error::DictionaryError,
    shape::Shape,
    tree::BalancedMap,
};

/// A word and its meaning.
///
/// Serialises as `{"key": word, "value": meaning}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "key")]
    pub word: String,
    #[serde(rename = "value")]
    pub meaning: String,
}

impl Definition {
    fn new(word: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

/// The outcome of [`Dictionary::remove()`].
///
/// Both outcomes are successes; removing an absent word changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The word was present and has been removed.
    Removed,
    /// The word was not present.
    Absent,
}

/// A dictionary of words and their meanings.
///
/// Words added without a meaning are resolved through the
/// [`DefinitionSource`] `S`. A failed lookup never fails the insert: the word
/// is stored with the configured `not_found` sentinel instead, so every
/// stored word has a meaning.
///
/// A [`Dictionary`] performs no internal locking; callers sharing one across
/// threads must serialise mutations (for example behind a mutex).
#[derive(Debug)]
pub struct Dictionary<S> {
    words: BalancedMap<String, String>,
    source: S,
    config: Config,
}

impl<S> Dictionary<S>
where
    S: DefinitionSource,
{
    /// Construct an empty [`Dictionary`].
    pub fn new(source: S, config: Config) -> Self {
        Self {
            words: BalancedMap::new(),
            source,
            config,
        }
    }

    /// Construct a [`Dictionary`] holding every configured seed word, each
    /// resolved through `source`.
    pub fn seeded(source: S, config: Config) -> Self {
        let mut this = Self::new(source, config);

        let seed_words = std::mem::take(&mut this.config.seed_words);
        for word in &seed_words {
            if let Err(error) = this.insert(word, None) {
                warn!(%error, word, "skipping seed word");
            }
        }
        this.config.seed_words = seed_words;

        info!(words = this.len(), "seeded dictionary");
        this
    }

    /// Insert `word`, replacing any meaning it already has.
    ///
    /// If `meaning` is [`None`] or empty, the meaning is looked up through the
    /// [`DefinitionSource`], falling back to the `not_found` sentinel when the
    /// lookup fails.
    ///
    /// Returns the stored [`Definition`].
    pub fn insert(&mut self, word: &str, meaning: Option<&str>) -> Result<Definition, DictionaryError> {
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        let meaning = match meaning.filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => self.resolve(word),
        };

        let def = Definition::new(word, &meaning);
        let replaced = self.words.insert(word.to_string(), meaning).is_some();
        debug!(word, replaced, "inserted word");

        Ok(def)
    }

    /// Look up the meaning of `word`, degrading any failure to the sentinel.
    fn resolve(&self, word: &str) -> String {
        match self.source.lookup(word) {
            Ok(v) if !v.is_empty() => v,
            Ok(_) => {
                warn!(word, "definition source returned an empty meaning");
                self.config.not_found.clone()
            }
            Err(error) => {
                warn!(%error, word, "definition lookup failed");
                self.config.not_found.clone()
            }
        }
    }
}

impl<S> Dictionary<S> {
    /// Remove `word`, if present.
    pub fn remove(&mut self, word: &str) -> Removal {
        match self.words.remove(word) {
            Some(_) => {
                debug!(word, "removed word");
                Removal::Removed
            }
            None => {
                debug!(word, "remove of absent word");
                Removal::Absent
            }
        }
    }

    /// The meaning of `word`, if present.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// All words starting with `prefix` and their meanings, in ascending word
    /// order.
    pub fn search(&self, prefix: &str) -> Vec<Definition> {
        self.words
            .prefix(prefix)
            .map(|(k, v)| Definition::new(k, v))
            .collect()
    }

    /// All words and their meanings, in ascending word order.
    pub fn all(&self) -> Vec<Definition> {
        self.words
            .iter()
            .map(|(k, v)| Definition::new(k, v))
            .collect()
    }

    /// A snapshot of the underlying tree structure, or [`None`] when empty.
    pub fn tree(&self) -> Option<Shape<&String, &String>> {
        self.words.snapshot()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
