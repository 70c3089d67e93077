use crate::model::Id;
use serde::{Deserialize, Serialize};
use time::UtcDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// A persisted blog entry. Posts are append-only: never updated, never deleted.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub content: PostContent,
    pub created_at: UtcDateTime,
}

/// The user-supplied part of a post. Neither field is validated; empty strings are stored as-is.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct PostContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl PostContent {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
