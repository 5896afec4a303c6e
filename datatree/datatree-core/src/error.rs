use thiserror::Error;

use crate::entity::EntityType;

#[derive(Error, Debug)]
pub enum DataTreeError {
    #[error("Data tree snapshot must be an object")]
    RootNotAnObject,
    #[error("Entity `{name}` matches more than one entity kind: {candidates:?}")]
    AmbiguousEntity {
        name: String,
        candidates: Vec<EntityType>,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type DataTreeResult<T> = Result<T, DataTreeError>;
