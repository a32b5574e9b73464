//! Error types for the dictionary service layer.
//!
//! The [`BalancedMap`](crate::BalancedMap) itself has no failure modes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`Dictionary`](crate::Dictionary) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// An insert was requested without a word.
    #[error("word is required")]
    EmptyWord,
}

/// Errors returned by a [`DefinitionSource`](crate::DefinitionSource).
///
/// These never escape a [`Dictionary`](crate::Dictionary), which stores its
/// configured sentinel meaning in place of a failed lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The source has no definition for the word.
    #[error("no definition found for {0:?}")]
    NotFound(String),

    /// The source responded with a payload that holds no definition.
    #[error("malformed definition payload: {0}")]
    Malformed(String),

    /// The source could not be reached.
    #[error("definition source unavailable: {0}")]
    Unavailable(String),
}

/// Errors loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or holds unknown or mistyped fields.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
