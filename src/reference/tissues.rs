//! Per-tissue expression levels, kept in stored order.
//!
//! Serialized as a JSON object (`{"liver": 95, "brain": 88}`). Entries keep
//! the order they appear in the source, which decides ties when sorting by
//! level.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TissueLevels(Vec<(String, u32)>);

impl TissueLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing the level of an existing tissue in place.
    pub fn insert(&mut self, tissue: impl Into<String>, level: u32) {
        let tissue = tissue.into();
        match self.0.iter_mut().find(|(name, _)| *name == tissue) {
            Some(entry) => entry.1 = level,
            None => self.0.push((tissue, level)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, tissue: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(name, _)| name == tissue)
            .map(|(_, level)| *level)
    }

    /// Entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, level)| (name.as_str(), *level))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TissueLevels {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut levels = TissueLevels::new();
        for (tissue, level) in iter {
            levels.insert(tissue, level);
        }
        levels
    }
}

impl Serialize for TissueLevels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (tissue, level) in &self.0 {
            map.serialize_entry(tissue, level)?;
        }
        map.end()
    }
}

struct TissueLevelsVisitor;

impl<'de> Visitor<'de> for TissueLevelsVisitor {
    type Value = TissueLevels;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of tissue name to expression level")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut levels = TissueLevels::new();
        while let Some((tissue, level)) = access.next_entry::<String, u32>()? {
            levels.insert(tissue, level);
        }
        Ok(levels)
    }
}

impl<'de> Deserialize<'de> for TissueLevels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TissueLevelsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut levels: TissueLevels = [("liver", 10), ("brain", 20)].into_iter().collect();
        levels.insert("liver", 30);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get("liver"), Some(30));
        assert_eq!(levels.iter().next(), Some(("liver", 30)));
    }

    #[test]
    fn test_json_keeps_source_order() {
        let levels: TissueLevels =
            serde_json::from_str(r#"{"skin": 92, "lung": 78, "brain": 58}"#).unwrap();
        let names: Vec<&str> = levels.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["skin", "lung", "brain"]);

        let json = serde_json::to_string(&levels).unwrap();
        assert_eq!(json, r#"{"skin":92,"lung":78,"brain":58}"#);
    }
}
