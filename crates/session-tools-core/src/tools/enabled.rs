//! Ordered, name-unique set of enabled tools

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::EnabledToolRef;

/// The session's enabled tools
///
/// Keeps insertion order and holds at most one entry per tool name.
/// Serializes as a plain sequence of `EnabledToolRef`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnabledToolSet {
    entries: Vec<EnabledToolRef>,
}

impl EnabledToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(EnabledToolRef::new).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&EnabledToolRef> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Add `entry`, replacing an existing entry with the same name in place
    ///
    /// Returns `true` when the name was not present before.
    pub fn insert(&mut self, entry: EnabledToolRef) -> bool {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                *existing = entry;
                false
            }
            None => {
                self.entries.push(entry);
                true
            }
        }
    }

    /// Add `entry` unless its name is already enabled
    pub fn insert_if_absent(&mut self, entry: EnabledToolRef) -> bool {
        if self.contains(&entry.name) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry named `name`, if any
    pub fn remove(&mut self, name: &str) -> Option<EnabledToolRef> {
        let pos = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(pos))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnabledToolRef> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collecting keeps the first entry for each name
impl FromIterator<EnabledToolRef> for EnabledToolSet {
    fn from_iter<T: IntoIterator<Item = EnabledToolRef>>(iter: T) -> Self {
        let mut set = Self::new();
        for entry in iter {
            if !set.contains(&entry.name) {
                set.entries.push(entry);
            }
        }
        set
    }
}

impl<'de> Deserialize<'de> for EnabledToolSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<EnabledToolRef>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EnabledToolSet {
    type Item = &'a EnabledToolRef;
    type IntoIter = std::slice::Iter<'a, EnabledToolRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = EnabledToolSet::from_names(["a", "b"]);
        assert!(!set.insert(EnabledToolRef::new("a").with_extra(json!(1))));
        assert!(set.insert(EnabledToolRef::new("c")));

        assert_eq!(set.names(), vec!["a", "b", "c"]);
        assert_eq!(set.get("a").and_then(|e| e.extra.clone()), Some(json!(1)));
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut set = EnabledToolSet::from_names(["a"]);
        assert!(set.remove("zzz").is_none());
        assert_eq!(set.remove("a").map(|e| e.name), Some("a".to_string()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: EnabledToolSet = serde_json::from_value(json!([
            { "name": "a", "extra": "first" },
            { "name": "b" },
            { "name": "a", "extra": "second" }
        ]))
        .unwrap();

        assert_eq!(set.names(), vec!["a", "b"]);
        assert_eq!(set.get("a").and_then(|e| e.extra.clone()), Some(json!("first")));
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!([{ "name": "a", "extra": "first" }, { "name": "b" }])
        );
    }
}
