use axum::{
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::ContentType;

/// A rendered page.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct Html(pub String);

impl IntoResponse for Html {
    fn into_response(self) -> Response {
        (TypedHeader(ContentType::html()), self.0).into_response()
    }
}

/// `302 Found` pointing at a fixed location.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Found(pub &'static str);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(LOCATION, HeaderValue::from_static(self.0))]).into_response()
    }
}
