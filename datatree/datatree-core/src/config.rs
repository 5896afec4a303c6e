use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DataTreeResult;

/// Per-entity configuration, parallel to the data tree.
///
/// Widgets and JS objects use different parts of it. Every part is optional,
/// a missing part behaves like an empty one.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct EntityConfig {
    /// Setter functions a widget may expose, by setter name
    #[serde(rename = "__setters", default, skip_serializing_if = "Option::is_none")]
    pub setters: Option<IndexMap<String, SetterConfig>>,

    /// Functions declared on a JS object, by function name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, JsFunctionMeta>,

    /// Variables declared on a JS object
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<String>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SetterConfig {
    /// The widget property the setter writes to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Type of the setter's `value` argument, unknown when absent
    #[serde(rename = "type", default = "unknown_setter_type")]
    pub setter_type: String,

    /// Property path on the widget. The setter is unavailable while it is truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
}

fn unknown_setter_type() -> String {
    "?".to_string()
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsFunctionMeta {
    #[serde(default)]
    pub arguments: Vec<Variable>,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub confirm_before_execute: bool,
}

/// A declared function argument
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct Variable {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Variable {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct ConfigTree(IndexMap<String, EntityConfig>);

impl ConfigTree {
    pub fn from_json(value: Value) -> DataTreeResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn get(&self, entity_name: &str) -> Option<&EntityConfig> {
        self.0.get(entity_name)
    }

    pub fn insert(&mut self, entity_name: impl Into<String>, config: EntityConfig) {
        self.0.insert(entity_name.into(), config);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &EntityConfig)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
