use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::{path::Operation, OpenApi};

use crate::model::api::{ErrorDto, SitemapDto};

/// Path the Swagger UI is served under
pub const DOCS_PATH: &str = "/api/docs";

/// Lists every documented route along with the location of the API documentation
pub async fn get_sitemap(Extension(sitemap): Extension<SitemapDto>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap))
}

/// Response for any route the router does not know about
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}

/// Response for a known route requested with a method it does not serve
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto {
            error: "Method not allowed".to_string(),
        }),
    )
}

/// Builds the route directory from the generated OpenAPI document.
///
/// Each operation becomes a `METHOD /path` entry, sorted alphabetically.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut endpoints = Vec::new();

    for (path, item) in &api.paths.paths {
        let operations: [(&str, &Option<Operation>); 5] = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            if operation.is_some() {
                endpoints.push(format!("{} {}", method, path));
            }
        }
    }

    endpoints.sort();

    SitemapDto {
        endpoints,
        docs: DOCS_PATH.to_string(),
    }
}
