use crate::{
    server::{
        Result, ServerError, ServerRouter,
        form::Form,
        response::{Found, Html},
    },
    views::{PostListView, Views},
};
use axum::{extract::State, routing::get};
use sparta_common::model::post::PostContent;
use sparta_db::PostStore;
use std::sync::Arc;
use tracing::info;

const POSTS_PATH: &str = "/posts";

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .route("/", get(redirect_to_posts))
        .route(POSTS_PATH, get(list_posts).post(create_post))
}

async fn redirect_to_posts() -> Found {
    Found(POSTS_PATH)
}

async fn list_posts(
    State(store): State<Arc<dyn PostStore>>,
    State(views): State<Arc<Views>>,
) -> Result<Html> {
    let posts = store
        .list_posts_by_recency()
        .await
        .map_err(ServerError::FetchPosts)?;

    let view = PostListView::new(&posts)?;
    Ok(Html(views.render(&view)?))
}

async fn create_post(
    State(store): State<Arc<dyn PostStore>>,
    Form(content): Form<PostContent>,
) -> Result<Found> {
    let post = store
        .create_post(&content)
        .await
        .map_err(ServerError::CreatePost)?;
    info!(id = %post.id, "Created post");

    Ok(Found(POSTS_PATH))
}
