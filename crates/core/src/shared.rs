// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A [`Slugger`] that can be reconfigured while other threads slug.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::Slugger;

/// Cloneable handle to one slugger behind a read-write lock.
///
/// `slug` calls share the read lock; mutators take the write lock, so a call
/// always sees either the whole old table or the whole new one.
#[derive(Clone, Debug, Default)]
pub struct SharedSlugger {
    inner: Arc<RwLock<Slugger>>,
}

impl SharedSlugger {
    pub fn new(slugger: Slugger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(slugger)),
        }
    }

    pub fn slug(&self, input: &str, separator: &str) -> String {
        self.inner.read().slug(input, separator)
    }

    /// Owned copy of the current configuration, for per-worker use.
    pub fn snapshot(&self) -> Slugger {
        self.inner.read().clone()
    }

    pub fn set_substitutions<I, K, V>(&self, substitutions: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.write().set_substitutions(substitutions);
    }

    pub fn add_substitution(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.write().add_substitution(key, value);
    }

    pub fn remove_substitution(&self, key: &str) -> Option<String> {
        self.inner.write().remove_substitution(key)
    }

    pub fn clear_substitutions(&self) {
        self.inner.write().clear_substitutions();
    }

    pub fn set_emoji(&self, enabled: bool) {
        self.inner.write().set_emoji(enabled);
    }
}

impl From<Slugger> for SharedSlugger {
    fn from(slugger: Slugger) -> Self {
        Self::new(slugger)
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
