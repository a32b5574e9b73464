//! Service configuration, loadable from a TOML file.
//!
//! Every field is optional in the file and falls back to its default:
//!
//! ```toml
//! not_found = "Meaning not found"
//! lookup_base_url = "https://api.dictionaryapi.dev/api/v2/entries/en"
//! seed_words = ["apple", "banana"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{definition::DEFAULT_LOOKUP_BASE_URL, error::ConfigError};

/// The meaning stored for a word whose definition lookup failed.
pub const DEFAULT_NOT_FOUND: &str = "Meaning not found";

/// The words a seeded [`Dictionary`](crate::Dictionary) starts with.
pub const DEFAULT_SEED_WORDS: &[&str] = &[
    "apple",
    "banana",
    "elephant",
    "keyboard",
    "monitor",
    "mouse",
    "window",
    "computer",
    "application",
    "dictionary",
    "cat",
    "dog",
];

/// Configuration of a [`Dictionary`](crate::Dictionary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The sentinel meaning stored when a definition lookup fails.
    pub not_found: String,

    /// Words resolved and inserted by [`Dictionary::seeded()`].
    ///
    /// [`Dictionary::seeded()`]: crate::Dictionary::seeded
    pub seed_words: Vec<String>,

    /// The base URL a network [`DefinitionSource`] queries.
    ///
    /// [`DefinitionSource`]: crate::DefinitionSource
    pub lookup_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            not_found: DEFAULT_NOT_FOUND.to_string(),
            seed_words: DEFAULT_SEED_WORDS.iter().map(|v| v.to_string()).collect(),
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Parse a [`Config`] from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse the TOML config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&s)?;
        debug!(path = %path.display(), seed_words = config.seed_words.len(), "loaded config");

        Ok(config)
    }
}
