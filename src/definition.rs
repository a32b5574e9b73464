//! Definition lookups for words added without a meaning.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::{config::Config, error::LookupError};

/// The public dictionary API queried for definitions by default.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// A source of definitions for words.
///
/// Implementations may fail; the [`Dictionary`](crate::Dictionary) degrades
/// any failure to its configured sentinel meaning and never retries.
pub trait DefinitionSource {
    /// Return the definition of `word`.
    fn lookup(&self, word: &str) -> Result<String, LookupError>;
}

impl<F> DefinitionSource for F
where
    F: Fn(&str) -> Result<String, LookupError>,
{
    fn lookup(&self, word: &str) -> Result<String, LookupError> {
        self(word)
    }
}

/// A [`DefinitionSource`] answering from a fixed in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticDefinitions(HashMap<String, String>);

impl StaticDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the definition of `word`, replacing any existing one.
    pub fn with(mut self, word: impl Into<String>, definition: impl Into<String>) -> Self {
        self.0.insert(word.into(), definition.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticDefinitions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl DefinitionSource for StaticDefinitions {
    fn lookup(&self, word: &str) -> Result<String, LookupError> {
        self.0
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }
}

/// Build the lookup URL for `word` under `base_url`, percent-encoding `word`
/// as a single path segment.
pub fn definition_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

/// A [`DefinitionSource`] querying a dictionary API over a caller-supplied
/// transport.
///
/// `fetch` is given the full lookup URL and returns the response body, which
/// is parsed with [`parse_definition()`]. Transport failures should be
/// reported as [`LookupError::Unavailable`].
#[derive(Debug, Clone)]
pub struct RemoteDefinitions<F> {
    base_url: String,
    fetch: F,
}

impl<F> RemoteDefinitions<F>
where
    F: Fn(&str) -> Result<String, LookupError>,
{
    pub fn new(base_url: impl Into<String>, fetch: F) -> Self {
        Self {
            base_url: base_url.into(),
            fetch,
        }
    }

    /// Construct a [`RemoteDefinitions`] querying the configured
    /// [`Config::lookup_base_url`].
    pub fn from_config(config: &Config, fetch: F) -> Self {
        Self::new(config.lookup_base_url.clone(), fetch)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl<F> DefinitionSource for RemoteDefinitions<F>
where
    F: Fn(&str) -> Result<String, LookupError>,
{
    fn lookup(&self, word: &str) -> Result<String, LookupError> {
        let url = definition_url(&self.base_url, word);
        debug!(word, %url, "fetching definition");

        let body = (self.fetch)(&url)?;
        parse_definition(word, &body)
    }
}

/// The response body of the dictionary API: either a list of entries, or an
/// object describing why there are none.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Entries(Vec<Entry>),
    Missing { title: String },
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    definition: String,
}

/// Extract the first definition of the first meaning of the first entry in a
/// dictionary API response `body` for `word`.
pub fn parse_definition(word: &str, body: &str) -> Result<String, LookupError> {
    let payload = serde_json::from_str::<Payload>(body)
        .map_err(|e| LookupError::Malformed(e.to_string()))?;

    let entries = match payload {
        Payload::Entries(v) => v,
        Payload::Missing { title } => {
            debug!(word, %title, "dictionary has no entry");
            return Err(LookupError::NotFound(word.to_string()));
        }
    };

    entries
        .into_iter()
        .next()
        .and_then(|e| e.meanings.into_iter().next())
        .and_then(|m| m.definitions.into_iter().next())
        .map(|d| d.definition)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| LookupError::Malformed(format!("no definition listed for {word:?}")))
}
