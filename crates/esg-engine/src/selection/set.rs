//! Ordered, deduplicated selection set.

use serde::{Deserialize, Serialize};

/// Whether a selection set holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// No keys selected.
    Empty,
    /// At least one key selected.
    NonEmpty,
}

/// An ordered set of selection keys (fund name, ISIN or sector name).
///
/// Insertion order is preserved. Every operation is total: adding a
/// duplicate, removing an absent key or adding a blank key is a no-op
/// reported through the `bool` return.
///
/// # Example
///
/// ```
/// use esg_engine::selection::SelectionSet;
///
/// let mut funds = SelectionSet::new();
/// assert!(funds.add("Alpha"));
/// assert!(!funds.add("Alpha"));
/// assert_eq!(funds.len(), 1);
/// assert!(funds.remove("Alpha"));
/// assert!(funds.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectionSet {
    keys: Vec<String>,
}

impl SelectionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key unless it is blank or already present.
    ///
    /// Returns true if the key was inserted.
    pub fn add(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if key.trim().is_empty() || self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Removes a key, keeping the order of the rest.
    ///
    /// Returns true if the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(idx) => {
                self.keys.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Returns true if the key is present (exact match).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        if self.keys.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::NonEmpty
        }
    }

    /// Keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Keys as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(keys: Vec<String>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<String> {
    fn from(set: SelectionSet) -> Self {
        set.keys
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.add(key);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
