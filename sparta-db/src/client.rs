use crate::{
    record::PostDocument,
    store::{PostStore, Result},
};
use async_trait::async_trait;
use bson::{DateTime, doc};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, Database};
use sparta_common::model::{
    ModelValidationError,
    post::{Post, PostContent},
};
use tracing::debug;

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE: &str = "sparta_app";
pub const POSTS_COLLECTION: &str = "posts";

#[derive(Clone, Debug)]
pub struct DbClient {
    database: Database,
    posts: Collection<PostDocument>,
}

impl DbClient {
    /// Builds a client from a `MongoDB` connection string.
    ///
    /// This only fails when the connection string itself is unusable. The driver connects lazily,
    /// use [`DbClient::ping`] to find out whether the server is actually reachable.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let client = Client::with_uri_str(connection_string).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        let posts = database.collection(POSTS_COLLECTION);

        Ok(Self { database, posts })
    }

    #[must_use]
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[async_trait]
impl PostStore for DbClient {
    async fn create_post(&self, content: &PostContent) -> Result<Post> {
        let mut document = PostDocument::new(content, DateTime::now());

        let inserted = self.posts.insert_one(&document).await?;
        document.id = inserted.inserted_id.as_object_id();
        debug!(id = ?document.id, "Inserted post");

        Ok(Post::try_from(document)?)
    }

    async fn list_posts_by_recency(&self) -> Result<Vec<Post>> {
        let documents: Vec<PostDocument> = self
            .posts
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        debug!(count = documents.len(), "Fetched posts");

        let posts = documents
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<_, ModelValidationError>>()?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        client::{DEFAULT_DATABASE, DbClient},
        store::PostStore,
    };
    use bson::oid::ObjectId;
    use sparta_common::model::post::PostContent;
    use time::UtcDateTime;

    #[tokio::test]
    async fn uses_database_from_connection_string() {
        let client = DbClient::connect("mongodb://localhost:27017/sparta_test")
            .await
            .unwrap();

        assert_eq!(client.database_name(), "sparta_test");
    }

    #[tokio::test]
    async fn falls_back_to_default_database() {
        let client = DbClient::connect("mongodb://localhost:27017").await.unwrap();

        assert_eq!(client.database_name(), DEFAULT_DATABASE);
    }

    #[tokio::test]
    async fn rejects_malformed_connection_string() {
        assert!(DbClient::connect("postgres://localhost").await.is_err());
    }

    #[tokio::test]
    #[ignore = "needs a running MongoDB reachable through DB_HOST"]
    async fn round_trips_posts_through_mongodb() {
        let connection_string = std::env::var("DB_HOST").expect("DB_HOST must be set");
        let client = DbClient::connect(&connection_string).await.unwrap();
        client.ping().await.unwrap();
        let content = PostContent::new(ObjectId::new().to_hex(), "round trip");

        // The store keeps milliseconds.
        let before = UtcDateTime::now().replace_nanosecond(0).unwrap();
        let created = client.create_post(&content).await.unwrap();
        let posts = client.list_posts_by_recency().await.unwrap();

        assert_eq!(created.content, content);
        assert!(created.created_at >= before);
        assert!(posts.contains(&created));
        assert!(
            posts
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
    }
}
