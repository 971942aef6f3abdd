use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const ERROR_TITLE: &str = "Error parsing file";
pub const ERROR_CATEGORY: &str = "error";
pub const GENERAL_CATEGORY: &str = "general";

/// One structured record built from a Markdown recipe.
///
/// `difficulty` distinguishes a missing section (`None`) from an empty one
/// (`Some("")`). `description` and `calculations` are only `None` on error
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub ingredients: Vec<String>,
    pub calculations: Option<Calculations>,
    pub instructions: Vec<String>,
    pub image_paths: Vec<String>,
    pub category: String,
    pub source_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Recipe {
    /// Placeholder record for a document that failed to parse
    pub fn error(source_file: impl Into<String>, message: impl Into<String>) -> Self {
        Recipe {
            title: ERROR_TITLE.to_string(),
            description: None,
            difficulty: None,
            ingredients: Vec::new(),
            calculations: None,
            instructions: Vec::new(),
            image_paths: Vec::new(),
            category: ERROR_CATEGORY.to_string(),
            source_file: source_file.into(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Contents of the calculations section.
///
/// Serialized as a JSON object when the key-value heuristics found pairs, and
/// as the raw section text when they found nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Calculations {
    Pairs(KeyValues),
    Raw(String),
}

impl Default for Calculations {
    fn default() -> Self {
        Calculations::Pairs(KeyValues::default())
    }
}

/// Insertion-ordered label to value mapping with unique labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValues(Vec<(String, String)>);

impl KeyValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair. An existing label keeps its position and takes the new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pairs = KeyValues::new();
        for (label, value) in iter {
            pairs.insert(label, value);
        }
        pairs
    }
}

impl Serialize for KeyValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

struct KeyValuesVisitor;

impl<'de> Visitor<'de> for KeyValuesVisitor {
    type Value = KeyValues;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of string labels to string values")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut pairs = KeyValues::new();
        while let Some((label, value)) = access.next_entry::<String, String>()? {
            pairs.insert(label, value);
        }
        Ok(pairs)
    }
}

impl<'de> Deserialize<'de> for KeyValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(KeyValuesVisitor)
    }
}
