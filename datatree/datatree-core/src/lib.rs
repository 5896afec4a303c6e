#![forbid(unsafe_code)]

use indexmap::IndexMap;

pub mod config;
pub mod data_tree;
pub mod entity;
pub mod error;

pub use config::{ConfigTree, EntityConfig};
pub use data_tree::DataTree;
pub use entity::{DataTreeEntity, EntityType, Properties};
pub use error::{DataTreeError, DataTreeResult};

/// Last observed return values of JS functions, keyed by `"Entity.function"`.
pub type FunctionSamples = IndexMap<String, serde_json::Value>;
