// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Literal substitutions applied before normalization.
//!
//! Keys match case-insensitively against the raw input and the longest key
//! wins at any position, so `&&` beats `&` regardless of insertion order.

use std::collections::BTreeMap;

/// A table of literal `key -> replacement` substitutions.
///
/// Entries are kept in a `BTreeMap` for stable iteration; the match order
/// (longest key first) is rebuilt on every mutation so scans never depend on
/// map ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: BTreeMap<String, String>,
    /// Keys as chars, sorted by descending length then by key text.
    match_order: Vec<(Vec<char>, String)>,
}

impl SubstitutionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the replacement stored for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert or overwrite one entry.
    ///
    /// Empty keys would match at every position and are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            tracing::warn!("ignoring substitution with empty key");
            return;
        }
        self.entries.insert(key, value.into());
        self.rebuild();
    }

    /// Remove one entry by exact key, returning its replacement if present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.rebuild();
        }
        removed
    }

    /// Replace every entry with the given pairs. An empty iterator clears the table.
    pub fn replace<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.clear();
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() {
                tracing::warn!("ignoring substitution with empty key");
                continue;
            }
            self.entries.insert(key, value.into());
        }
        self.rebuild();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.match_order.clear();
    }

    /// Apply the table to `input`.
    ///
    /// Each matched span becomes a single space followed by the replacement,
    /// so the replacement always starts a new token. Replacements are never
    /// re-scanned.
    pub fn apply(&self, input: &str) -> String {
        if self.match_order.is_empty() {
            return input.to_string();
        }

        let chars: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len());
        let mut pos = 0;
        while pos < chars.len() {
            match self.longest_match(&chars[pos..]) {
                Some((consumed, value)) => {
                    out.push(' ');
                    out.push_str(value);
                    pos += consumed;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }
        out
    }

    /// Find the longest key that prefixes `rest`, returning its length in chars.
    fn longest_match(&self, rest: &[char]) -> Option<(usize, &str)> {
        self.match_order.iter().find_map(|(key, value)| {
            let hit = key.len() <= rest.len()
                && key.iter().zip(rest).all(|(&k, &c)| chars_eq_fold(k, c));
            hit.then_some((key.len(), value.as_str()))
        })
    }

    fn rebuild(&mut self) {
        let mut order: Vec<(Vec<char>, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.chars().collect(), v.clone()))
            .collect();
        // BTreeMap iteration is already key-ordered, so a stable sort on length
        // keeps ties in key order.
        order.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self.match_order = order;
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.replace(iter);
        table
    }
}

/// Compare two chars ignoring case.
fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
#[path = "substitution_tests.rs"]
mod tests;
