use crate::store::{PostStore, Result};
use async_trait::async_trait;
use bson::oid::ObjectId;
use sparta_common::model::post::{Post, PostContent};
use std::cmp::Reverse;
use time::UtcDateTime;
use tokio::sync::Mutex;
use tracing::debug;

/// Keeps posts in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryPostStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create_post(&self, content: &PostContent) -> Result<Post> {
        let post = Post {
            id: ObjectId::new().into(),
            content: content.clone(),
            created_at: UtcDateTime::now(),
        };

        self.posts.lock().await.push(post.clone());
        debug!(id = %post.id, "Stored post in memory");

        Ok(post)
    }

    async fn list_posts_by_recency(&self) -> Result<Vec<Post>> {
        let mut posts = self.posts.lock().await.clone();
        posts.sort_by_key(|post| Reverse(post.created_at));

        Ok(posts)
    }
}
