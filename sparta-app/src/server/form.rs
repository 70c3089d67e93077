use crate::server::ServerError;
use axum::{
    Form as AxumForm, Json as AxumJson,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;

/// A submitted body, decoded as JSON when the request says so and as a url-encoded form otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

impl<T, S> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_json_content_type(request.headers()) {
            let AxumJson(value) = AxumJson::<T>::from_request(request, state).await?;
            Ok(Self(value))
        } else {
            let AxumForm(value) = AxumForm::<T>::from_request(request, state).await?;
            Ok(Self(value))
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| {
            let essence = essence.trim();
            essence.eq_ignore_ascii_case("application/json")
                || essence.to_ascii_lowercase().ends_with("+json")
        })
}
