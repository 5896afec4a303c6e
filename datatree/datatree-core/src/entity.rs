use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DataTreeError, DataTreeResult};

/// Key of the entity kind marker carried by data tree snapshots
pub const ENTITY_TYPE_KEY: &str = "ENTITY_TYPE";

/// The kind of a data tree entity
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Widget,
    Action,
    Appsmith,
    JsAction,
}

impl EntityType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Widget => "WIDGET",
            Self::Action => "ACTION",
            Self::Appsmith => "APPSMITH",
            Self::JsAction => "JSACTION",
        }
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The JSON properties of an entity, in snapshot order.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Properties(Map<String, Value>);

impl Properties {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a dotted property path like `selectedRow.name` or `options.0`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.0.get(segments.next()?)?;

        segments.try_fold(first, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct WidgetEntity {
    widget_type: String,
    properties: Properties,
}

impl WidgetEntity {
    pub fn new(widget_type: impl Into<String>, properties: impl Into<Properties>) -> Self {
        Self {
            widget_type: widget_type.into(),
            properties: properties.into(),
        }
    }

    /// The widget kind, e.g. `TABLE_WIDGET_V2`
    pub fn widget_type(&self) -> &str {
        &self.widget_type
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// An API or query action
#[derive(Clone, PartialEq, Debug)]
pub struct ActionEntity(pub Properties);

/// The global `appsmith` object
#[derive(Clone, PartialEq, Debug)]
pub struct AppsmithEntity(pub Properties);

/// A JS object holding functions and variables
#[derive(Clone, PartialEq, Debug)]
pub struct JsActionEntity(pub Properties);

/// An entity of the data tree, with its kind resolved.
#[derive(Clone, PartialEq, Debug)]
pub enum DataTreeEntity {
    Widget(WidgetEntity),
    Action(ActionEntity),
    Appsmith(AppsmithEntity),
    JsAction(JsActionEntity),
}

impl DataTreeEntity {
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Widget(_) => EntityType::Widget,
            Self::Action(_) => EntityType::Action,
            Self::Appsmith(_) => EntityType::Appsmith,
            Self::JsAction(_) => EntityType::JsAction,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Self::Widget(widget) => widget.properties(),
            Self::Action(ActionEntity(properties))
            | Self::Appsmith(AppsmithEntity(properties))
            | Self::JsAction(JsActionEntity(properties)) => properties,
        }
    }

    /// Resolve the kind of a raw snapshot entity.
    ///
    /// An explicit `ENTITY_TYPE` marker decides on its own. Without a marker the
    /// shape of the object is probed, and more than one matching kind is an error.
    /// Returns `None` when no kind matches, or for a widget without a string `type`.
    pub fn from_object(name: &str, object: Map<String, Value>) -> DataTreeResult<Option<Self>> {
        let candidates = classify(&object);

        let entity_type = match candidates.as_slice() {
            [] => return Ok(None),
            [entity_type] => *entity_type,
            _ => {
                return Err(DataTreeError::AmbiguousEntity {
                    name: name.to_string(),
                    candidates,
                });
            }
        };

        let entity = match entity_type {
            EntityType::Widget => {
                let Some(widget_type) = object.get("type").and_then(Value::as_str) else {
                    debug!("widget `{name}` has no widget type, leaving it out");
                    return Ok(None);
                };
                Self::Widget(WidgetEntity::new(widget_type.to_string(), object))
            }
            EntityType::Action => Self::Action(ActionEntity(object.into())),
            EntityType::Appsmith => Self::Appsmith(AppsmithEntity(object.into())),
            EntityType::JsAction => Self::JsAction(JsActionEntity(object.into())),
        };

        Ok(Some(entity))
    }
}

fn classify(object: &Map<String, Value>) -> Vec<EntityType> {
    let marker = object.get(ENTITY_TYPE_KEY).and_then(Value::as_str);

    [
        (EntityType::Widget, is_widget(object, marker)),
        (EntityType::Action, is_action(object, marker)),
        (EntityType::Appsmith, is_appsmith(object, marker)),
        (EntityType::JsAction, is_js_action(object, marker)),
    ]
    .into_iter()
    .filter_map(|(entity_type, matches)| matches.then_some(entity_type))
    .collect()
}

fn has_all(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| object.contains_key(*key))
}

fn is_widget(object: &Map<String, Value>, marker: Option<&str>) -> bool {
    match marker {
        Some(marker) => marker == EntityType::Widget.as_str(),
        None => {
            object.contains_key("widgetId")
                && object.get("type").is_some_and(Value::is_string)
        }
    }
}

fn is_action(object: &Map<String, Value>, marker: Option<&str>) -> bool {
    match marker {
        Some(marker) => marker == EntityType::Action.as_str(),
        None => has_all(object, &["actionId", "config"]),
    }
}

fn is_appsmith(object: &Map<String, Value>, marker: Option<&str>) -> bool {
    match marker {
        Some(marker) => marker == EntityType::Appsmith.as_str(),
        None => has_all(object, &["store", "URL"]),
    }
}

fn is_js_action(object: &Map<String, Value>, marker: Option<&str>) -> bool {
    match marker {
        Some(marker) => marker == EntityType::JsAction.as_str(),
        None => has_all(object, &["actionId", "body"]),
    }
}
