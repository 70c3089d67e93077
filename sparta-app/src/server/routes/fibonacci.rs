use crate::{
    server::{Result, ServerRouter, form::Form, response::Html},
    views::{FibonacciView, Views},
};
use axum::{extract::State, routing::get};
use serde::Deserialize;
use sparta_common::fibonacci::{FibonacciInput, fibonacci};
use std::sync::Arc;
use tokio::task;
use tracing::debug;

pub fn routes() -> ServerRouter {
    ServerRouter::new().route("/fibonacci", get(show_form).post(calculate))
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
struct FibonacciForm {
    #[serde(default)]
    number: Option<NumberField>,
}

/// Form bodies always carry text, JSON bodies may carry a number instead.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(untagged)]
enum NumberField {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl NumberField {
    fn to_text(&self) -> String {
        match self {
            NumberField::Text(text) => text.clone(),
            NumberField::Integer(n) => n.to_string(),
            NumberField::Float(n) => n.to_string(),
        }
    }
}

async fn show_form(State(views): State<Arc<Views>>) -> Result<Html> {
    Ok(Html(views.render(&FibonacciView::empty())?))
}

async fn calculate(
    State(views): State<Arc<Views>>,
    Form(form): Form<FibonacciForm>,
) -> Result<Html> {
    let number = form
        .number
        .as_ref()
        .map(NumberField::to_text)
        .unwrap_or_default();

    let view = match FibonacciInput::parse(&number) {
        Ok(input) => {
            let n = input.get();
            // Exponential time, keep it off the request loop.
            let result = task::spawn_blocking(move || fibonacci(n)).await?;
            FibonacciView::with_result(n, result)
        }
        Err(err) => {
            debug!(input = number.as_str(), %err, "Rejected fibonacci input");
            FibonacciView::with_error(err)
        }
    };

    Ok(Html(views.render(&view)?))
}
