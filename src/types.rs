//! Core, format-agnostic types for stringsheet.
//! The XML reader decodes into these; the transposer flattens them into a
//! [`Matrix`](crate::Matrix) and rebuilds them from one.
//!
//! Both maps are ordered, so languages and keys always enumerate in
//! ascending byte-wise order. That order is what fixes the column and row
//! layout of a generated matrix.

use std::collections::{
    BTreeMap, BTreeSet,
    btree_map::{self, Entry},
};

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

impl Parser for DictionarySet {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }
}

/// The string resources of exactly one language: key → translated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the translation for `key`, returning the previous one if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The full multi-language resource collection: language code → [`Dictionary`].
///
/// Languages are keyed independently; a key present in one language need not
/// exist in another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DictionarySet {
    dictionaries: BTreeMap<String, Dictionary>,
}

impl DictionarySet {
    /// Creates an empty set with zero languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` as the translation of `key` in `language`.
    ///
    /// The language is created on first use. Repeating a call with a
    /// different value overwrites the previous one.
    pub fn add_translation(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.dictionary_mut(language).insert(key, value);
    }

    /// Returns the dictionary of `language`, creating an empty one if needed.
    pub fn dictionary_mut(&mut self, language: impl Into<String>) -> &mut Dictionary {
        self.dictionaries.entry(language.into()).or_default()
    }

    /// Replaces the whole dictionary of `language`.
    pub fn insert_dictionary(
        &mut self,
        language: impl Into<String>,
        dictionary: Dictionary,
    ) -> Option<Dictionary> {
        self.dictionaries.insert(language.into(), dictionary)
    }

    /// Adds `language` with an empty dictionary. Returns `false` if it was
    /// already present, leaving its dictionary untouched.
    pub fn add_language(&mut self, language: impl Into<String>) -> bool {
        match self.dictionaries.entry(language.into()) {
            Entry::Vacant(slot) => {
                slot.insert(Dictionary::new());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn dictionary(&self, language: &str) -> Option<&Dictionary> {
        self.dictionaries.get(language)
    }

    pub fn translation(&self, language: &str, key: &str) -> Option<&str> {
        self.dictionaries.get(language)?.get(key)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    /// Keys present in `language`, or `None` if the language is unknown.
    pub fn keys(&self, language: &str) -> Option<impl Iterator<Item = &str>> {
        self.dictionaries.get(language).map(Dictionary::keys)
    }

    /// Union of the keys of every language.
    pub fn all_keys(&self) -> BTreeSet<&str> {
        self.dictionaries.values().flat_map(Dictionary::keys).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dictionary)> {
        self.dictionaries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of languages.
    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, Dictionary)> for DictionarySet {
    fn from_iter<I: IntoIterator<Item = (L, Dictionary)>>(iter: I) -> Self {
        Self {
            dictionaries: iter.into_iter().map(|(l, d)| (l.into(), d)).collect(),
        }
    }
}

impl IntoIterator for DictionarySet {
    type Item = (String, Dictionary);
    type IntoIter = btree_map::IntoIter<String, Dictionary>;

    fn into_iter(self) -> Self::IntoIter {
        self.dictionaries.into_iter()
    }
}
