use async_trait::async_trait;
use sparta_common::model::{
    ModelValidationError,
    post::{Post, PostContent},
};
use std::fmt::Debug;
use thiserror::Error;

pub type Result<T, E = StorageError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("A document in the store was invalid: {0}")]
    Data(#[from] ModelValidationError),
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Durable storage for posts.
///
/// Posts are append-only, so the store only knows how to add one and how to read all of them
/// back, newest first.
#[async_trait]
pub trait PostStore: Debug + Send + Sync {
    /// Persists a new post, assigning its id and creation time.
    async fn create_post(&self, content: &PostContent) -> Result<Post>;

    /// Every stored post, ordered by creation time descending. Order among posts created at
    /// the same instant is unspecified.
    async fn list_posts_by_recency(&self) -> Result<Vec<Post>>;
}
