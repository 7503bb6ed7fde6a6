// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// String key/value annotations attached to a suite or a case: properties, tags and categories.
///
/// Keys are case-sensitive and iteration follows insertion order. A child level never shares a
/// map with its parent: inheritance always goes through [`Metadata::resolve`], which clones.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, String>);

impl Metadata {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with `own` applied on top. Own pairs win on collision.
    ///
    /// `self` is never modified, so a suite's map can seed any number of cases.
    pub fn resolve<K, V>(&self, own: impl IntoIterator<Item = (K, V)>) -> Metadata
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut child = self.clone();
        child.extend(own);
        child
    }

    /// Inserts a key/value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Appends `value` to the comma-joined list stored under `key`.
    ///
    /// Values already present in the list are not repeated, so the list keeps first-seen order.
    pub fn append_list(&mut self, key: &str, value: &str) -> &mut Self {
        match self.0.get_mut(key) {
            Some(list) if list.is_empty() => *list = value.to_owned(),
            Some(list) => {
                if !list.split(',').any(|existing| existing == value) {
                    list.push(',');
                    list.push_str(value);
                }
            }
            None => {
                self.0.insert(key.to_owned(), value.to_owned());
            }
        }
        self
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Metadata {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        metadata.extend(iter);
        metadata
    }
}
