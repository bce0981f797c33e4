//! Extractors whose rejections render as [`JsonApiError`] instead of axum's plain text.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;

use crate::errors::JsonApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ApiQuery<T>(pub T);

fn bad_request(detail: String) -> JsonApiError {
    JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(detail))
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self { bad_request(rejection.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self { bad_request(rejection.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self { bad_request(rejection.body_text()) }
}
