//! The virtual file store.
//!
//! Files are nothing but named string buffers held in memory; there is no
//! backing storage and no size limit. A `BTreeMap` keeps listing order
//! deterministic across runs.

use std::collections::BTreeMap;

/// Whether [`FileStore::create`] made a new entry or replaced an old one.
///
/// The caller picks the notice verb from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Overwrote,
}

/// In-memory mapping from file name to content.
#[derive(Debug, Default)]
pub struct FileStore {
    files: BTreeMap<String, String>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` with `content`, replacing any existing content.
    pub fn create(&mut self, name: &str, content: &str) -> CreateOutcome {
        match self.files.insert(name.to_string(), content.to_string()) {
            Some(_) => CreateOutcome::Overwrote,
            None => CreateOutcome::Created,
        }
    }

    /// Concatenate `content` onto an existing file.
    ///
    /// Returns false (and leaves the store untouched) when no such file
    /// exists.
    pub fn append(&mut self, name: &str, content: &str) -> bool {
        match self.files.get_mut(name) {
            Some(existing) => {
                existing.push_str(content);
                true
            }
            None => false,
        }
    }

    /// The full content of `name`, verbatim.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Delete `name`. Returns false when no such file exists.
    pub fn remove(&mut self, name: &str) -> bool {
        self.files.remove(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All files in deterministic (name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
