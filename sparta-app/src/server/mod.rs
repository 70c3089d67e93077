use crate::views::Views;
use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use sparta_db::{PostStore, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tower_http::services::ServeDir;
use tracing::error;

mod form;
mod response;
mod routes;
#[cfg(test)]
mod testing;

const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub post_store: Arc<dyn PostStore>,
    pub views: Arc<Views>,
}

impl ServerState {
    pub fn new(post_store: Arc<dyn PostStore>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            post_store,
            views: Arc::new(Views::new()?),
        })
    }
}

pub fn routes() -> ServerRouter {
    routes::routes()
        .nest_service("/public", ServeDir::new(PUBLIC_DIR))
        .fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Incoming form rejected: {0}")]
    FormRejection(#[from] FormRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("Error fetching posts: {0}")]
    FetchPosts(StorageError),
    #[error("Error creating post: {0}")]
    CreatePost(StorageError),
    #[error("Template could not be rendered: {0}")]
    Render(#[from] minijinja::Error),
    #[error("Timestamp could not be formatted: {0}")]
    TimestampFormat(#[from] time::error::Format),
    #[error("Fibonacci computation did not finish: {0}")]
    FibonacciTask(#[from] JoinError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_) => StatusCode::NOT_FOUND,
            ServerError::FormRejection(rejection) => rejection.status(),
            ServerError::JsonRejection(rejection) => rejection.status(),
            ServerError::FetchPosts(_)
            | ServerError::CreatePost(_)
            | ServerError::Render(_)
            | ServerError::TimestampFormat(_)
            | ServerError::FibonacciTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the client gets to see. Causes stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServerError::UnknownRoute(_) => "Not found",
            ServerError::FormRejection(_) => "Invalid form submission",
            ServerError::JsonRejection(_) => "Invalid JSON submission",
            ServerError::FetchPosts(_) => "Error fetching posts",
            ServerError::CreatePost(_) => "Error creating post",
            ServerError::Render(_)
            | ServerError::TimestampFormat(_)
            | ServerError::FibonacciTask(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        (status, self.public_message()).into_response()
    }
}
