use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` whose rejections answer with the API's JSON error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
