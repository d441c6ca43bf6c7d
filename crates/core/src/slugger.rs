// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The slug pipeline.

use crate::emoji::replace_emoji;
use crate::normalize::to_ascii;
use crate::substitution::SubstitutionTable;
use crate::tokenize::join_tokens;

/// Turns free-form text into lowercase ASCII slugs.
///
/// Each call runs substitution, optional emoji naming, ASCII normalization
/// and token joining, in that order. `slug` borrows `&self` and never fails,
/// so one instance can serve many threads; mutating the table needs
/// `&mut self` (see [`SharedSlugger`](crate::SharedSlugger) for shared
/// mutable use).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slugger {
    substitutions: SubstitutionTable,
    emoji: bool,
}

impl Slugger {
    /// Create a slugger from initial substitutions and the emoji flag.
    ///
    /// ```
    /// use slugger::Slugger;
    ///
    /// let slugger = Slugger::new([("&", "and")], false);
    /// assert_eq!(slugger.slug("Salt & Pepper", "-"), "salt-and-pepper");
    /// ```
    pub fn new<I, K, V>(substitutions: I, with_emoji: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            substitutions: substitutions.into_iter().collect(),
            emoji: with_emoji,
        }
    }

    /// Slugify `input`, joining tokens with `separator` (`"-"` when empty).
    ///
    /// Empty, whitespace-only or fully unsupported input yields `""`.
    pub fn slug(&self, input: &str, separator: &str) -> String {
        let substituted = self.substitutions.apply(input);
        let expanded = if self.emoji {
            replace_emoji(&substituted)
        } else {
            substituted
        };
        let ascii = to_ascii(&expanded);
        let slug = join_tokens(&ascii, separator);
        tracing::trace!(input, %slug, "slugified");
        slug
    }

    pub fn substitutions(&self) -> &SubstitutionTable {
        &self.substitutions
    }

    /// Replace the whole substitution table. An empty iterator clears it.
    pub fn set_substitutions<I, K, V>(&mut self, substitutions: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.substitutions.replace(substitutions);
        tracing::debug!(count = self.substitutions.len(), "substitutions replaced");
    }

    /// Insert or overwrite one substitution.
    pub fn add_substitution(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        tracing::debug!(key = %key, "substitution added");
        self.substitutions.insert(key, value);
    }

    /// Remove one substitution by exact key. Absent keys are ignored.
    pub fn remove_substitution(&mut self, key: &str) -> Option<String> {
        let removed = self.substitutions.remove(key);
        if removed.is_some() {
            tracing::debug!(key, "substitution removed");
        }
        removed
    }

    pub fn clear_substitutions(&mut self) {
        self.substitutions.clear();
        tracing::debug!("substitutions cleared");
    }

    pub fn emoji_enabled(&self) -> bool {
        self.emoji
    }

    /// Toggle emoji naming for subsequent calls.
    pub fn set_emoji(&mut self, enabled: bool) {
        self.emoji = enabled;
    }
}

#[cfg(test)]
#[path = "slugger_tests.rs"]
mod tests;
