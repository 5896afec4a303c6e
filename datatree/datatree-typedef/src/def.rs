use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema identity
pub const NAME_KEY: &str = "!name";
/// Auxiliary named definitions
pub const DEFINE_KEY: &str = "!define";
pub const TYPE_KEY: &str = "!type";
pub const DOC_KEY: &str = "!doc";
pub const URL_KEY: &str = "!url";

pub const UNKNOWN_TYPE: &str = "?";
pub const UNKNOWN_ARRAY_TYPE: &str = "[?]";

/// Keys starting with `!` are schema metadata, not accessible properties.
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with('!')
}

/// A hint engine type definition: an ordered mapping from name to type.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct Def(IndexMap<String, DefValue>);

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum DefValue {
    /// A type expression like `string`, `[number]` or `fn(a: ?)`
    Type(String),
    Def(Def),
}

impl Def {
    pub fn named(name: impl Into<String>) -> Self {
        let mut def = Self::default();
        def.insert(NAME_KEY, name.into());
        def
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DefValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&DefValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DefValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<DefValue>> FromIterator<(K, V)> for Def {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<DefValue>> Extend<(K, V)> for Def {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Def {
    type Item = (String, DefValue);
    type IntoIter = indexmap::map::IntoIter<String, DefValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl DefValue {
    pub fn unknown() -> Self {
        Self::Type(UNKNOWN_TYPE.to_string())
    }

    pub fn unknown_array() -> Self {
        Self::Type(UNKNOWN_ARRAY_TYPE.to_string())
    }

    pub fn as_type(&self) -> Option<&str> {
        match self {
            Self::Type(type_name) => Some(type_name),
            Self::Def(_) => None,
        }
    }

    pub fn as_def(&self) -> Option<&Def> {
        match self {
            Self::Type(_) => None,
            Self::Def(def) => Some(def),
        }
    }
}

impl From<&str> for DefValue {
    fn from(value: &str) -> Self {
        Self::Type(value.to_string())
    }
}

impl From<String> for DefValue {
    fn from(value: String) -> Self {
        Self::Type(value)
    }
}

impl From<Def> for DefValue {
    fn from(value: Def) -> Self {
        Self::Def(value)
    }
}

/// Sink for auxiliary definitions that are referenced by name instead of inlined.
#[derive(Clone, Debug)]
pub struct ExtraDefs {
    prefix: String,
    next_id: usize,
    defs: Def,
}

impl Default for ExtraDefs {
    fn default() -> Self {
        Self::with_prefix("def_")
    }
}

impl ExtraDefs {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: 0,
            defs: Def::default(),
        }
    }

    /// Store `def` under a fresh generated name and return the name.
    pub fn define(&mut self, def: Def) -> String {
        let name = loop {
            self.next_id += 1;
            let name = format!("{}{}", self.prefix, self.next_id);
            if !self.defs.contains_key(&name) {
                break name;
            }
        };
        self.defs.insert(name.clone(), def);
        name
    }

    /// Store a definition under a caller chosen name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<DefValue>) {
        self.defs.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&DefValue> {
        self.defs.get(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn into_def(self) -> Def {
        self.defs
    }
}
