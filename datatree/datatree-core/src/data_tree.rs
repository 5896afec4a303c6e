use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::{
    entity::DataTreeEntity,
    error::{DataTreeError, DataTreeResult},
};

/// The entity graph of an application, in snapshot order.
///
/// Entity kinds are resolved once when the tree is built.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DataTree {
    entities: IndexMap<String, DataTreeEntity>,
}

impl DataTree {
    pub fn from_json(value: Value) -> DataTreeResult<Self> {
        let Value::Object(root) = value else {
            return Err(DataTreeError::RootNotAnObject);
        };

        let mut tree = Self::default();

        for (name, entity) in root {
            let Value::Object(object) = entity else {
                debug!("`{name}` is not an object, leaving it out");
                continue;
            };

            match DataTreeEntity::from_object(&name, object)? {
                Some(entity) => {
                    tree.entities.insert(name, entity);
                }
                None => {
                    debug!("`{name}` is not a known entity kind, leaving it out");
                }
            }
        }

        Ok(tree)
    }

    pub fn insert(&mut self, name: impl Into<String>, entity: DataTreeEntity) {
        self.entities.insert(name.into(), entity);
    }

    pub fn get(&self, name: &str) -> Option<&DataTreeEntity> {
        self.entities.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DataTreeEntity)> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
