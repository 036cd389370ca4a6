//! Option descriptors and the ordered option list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// The value carried by an option: either free text or a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A single entry in the list. Identified by its position, not its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOption {
    pub label: String,
    pub value: OptionValue,
}

impl ComboOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// An option whose value is its own label.
    pub fn simple(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: OptionValue::Text(label.clone()),
            label,
        }
    }
}

/// Where an option list comes from: an already structured value, or its
/// JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Structured(Vec<ComboOption>),
    Json(String),
}

impl From<Vec<ComboOption>> for OptionSource {
    fn from(options: Vec<ComboOption>) -> Self {
        Self::Structured(options)
    }
}

impl From<&str> for OptionSource {
    fn from(text: &str) -> Self {
        Self::Json(text.to_string())
    }
}

impl From<String> for OptionSource {
    fn from(text: String) -> Self {
        Self::Json(text)
    }
}

/// Ordered, immutable sequence of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<ComboOption>,
}

impl OptionList {
    pub fn new(options: Vec<ComboOption>) -> Self {
        Self { options }
    }

    /// Strictly parse the JSON encoding of an option list.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_array() {
            return Err(ConfigError::NotAList {
                found: json_kind(&value),
            });
        }
        let options: Vec<ComboOption> = serde_json::from_value(value)?;
        Ok(Self { options })
    }

    /// Build a list from configuration, treating an absent or malformed
    /// source as "no options".
    pub fn from_source(source: Option<&OptionSource>) -> Self {
        match source {
            None => Self::default(),
            Some(OptionSource::Structured(options)) => Self::new(options.clone()),
            Some(OptionSource::Json(text)) => Self::parse(text).unwrap_or_else(|e| {
                log::warn!("ignoring option configuration: {e}");
                Self::default()
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ComboOption> {
        self.options.get(index)
    }

    /// Whether `index` names an option in this list.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.options.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComboOption> {
        self.options.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
