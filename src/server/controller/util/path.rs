use axum::extract::FromRequestParts;

use crate::server::error::Error;

/// Path parameters extractor whose rejections are mapped through [`Error`].
///
/// An ID segment that fails to parse as the expected integer answers with the JSON 404 body
/// instead of axum's plain-text 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
