use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use sparta_common::model::{
    ModelValidationError,
    post::{Post, PostContent},
};

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime,
}

impl PostDocument {
    pub fn new(content: &PostContent, created_at: DateTime) -> Self {
        Self {
            id: None,
            title: content.title.clone(),
            body: content.body.clone(),
            created_at,
        }
    }
}

impl TryFrom<PostDocument> for Post {
    type Error = ModelValidationError;

    fn try_from(value: PostDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.ok_or(ModelValidationError::MissingId)?.into(),
            content: PostContent {
                title: value.title,
                body: value.body,
            },
            created_at: value.created_at.to_time_0_3().to_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::record::PostDocument;
    use bson::{DateTime, doc, oid::ObjectId};
    use sparta_common::model::{
        ModelValidationError,
        post::{Post, PostContent},
    };

    #[test]
    fn serializes_to_stored_shape() {
        let created_at = DateTime::from_millis(1_700_000_000_000);
        let document = PostDocument::new(&PostContent::new("Title", "Body"), created_at);

        let serialized = bson::to_document(&document).unwrap();

        assert_eq!(
            serialized,
            doc! { "title": "Title", "body": "Body", "createdAt": created_at }
        );
    }

    #[test]
    fn converts_stored_document() {
        let object_id = ObjectId::new();
        let stored = doc! {
            "_id": object_id,
            "title": "Title",
            "body": "",
            "createdAt": DateTime::from_millis(1_700_000_000_123),
        };

        let document: PostDocument = bson::from_document(stored).unwrap();
        let post = Post::try_from(document).unwrap();

        assert_eq!(post.id.object_id(), object_id);
        assert_eq!(post.content, PostContent::new("Title", ""));
        assert_eq!(post.created_at.unix_timestamp(), 1_700_000_000);
        assert_eq!(post.created_at.millisecond(), 123);
    }

    #[test]
    fn document_without_id_is_invalid() {
        let document = PostDocument::new(&PostContent::default(), DateTime::now());

        assert_eq!(Post::try_from(document), Err(ModelValidationError::MissingId));
    }
}
