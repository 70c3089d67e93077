use crate::{
    server::{Result, ServerRouter, form::Form, response::Html},
    views::{HackableView, UnescapedHtml, Views},
};
use axum::{extract::State, routing::get};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().route("/hackable", get(show_form).post(greet))
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HackableForm {
    #[serde(default)]
    user_input: String,
}

async fn show_form(State(views): State<Arc<Views>>) -> Result<Html> {
    Ok(Html(views.render(&HackableView::default())?))
}

/// Echoes the submitted text back without escaping it. This page exists to demonstrate
/// reflected script injection and must stay vulnerable.
async fn greet(State(views): State<Arc<Views>>, Form(form): Form<HackableForm>) -> Result<Html> {
    let message = UnescapedHtml::new_unescaped(format!("Hello, {}!", form.user_input));

    let view = HackableView {
        message: Some(message),
    };
    Ok(Html(views.render(&view)?))
}
