// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration for building a [`Slugger`].
//!
//! ```toml
//! separator = "_"
//! emoji = true
//!
//! [substitutions]
//! "&" = "and"
//! "%" = "percent"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::tokenize::effective_separator;
use crate::Slugger;

/// Errors from reading or validating a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("substitution keys must not be empty")]
    EmptyKey,
}

/// Slugger settings as written in a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SluggerConfig {
    /// Joining string; the default separator is used when absent or empty.
    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub emoji: bool,
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
}

impl SluggerConfig {
    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        if config.substitutions.contains_key("") {
            return Err(ConfigError::EmptyKey);
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            substitutions = config.substitutions.len(),
            emoji = config.emoji,
            "loaded slugger config"
        );
        Ok(config)
    }

    /// The separator to join with, resolving the default.
    pub fn separator(&self) -> &str {
        effective_separator(self.separator.as_deref().unwrap_or_default())
    }

    pub fn build(&self) -> Slugger {
        Slugger::from(self)
    }
}

impl From<&SluggerConfig> for Slugger {
    fn from(config: &SluggerConfig) -> Self {
        Self::new(
            config
                .substitutions
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
            config.emoji,
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
