use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request succeeds without returning a record
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Static greeting returned by `GET /user`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GreetingDto {
    pub msg: String,
}

/// Directory of every documented route, returned by `GET /`
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    /// Routes formatted as `METHOD /path`
    pub endpoints: Vec<String>,
    /// Location of the interactive API documentation
    pub docs: String,
}
