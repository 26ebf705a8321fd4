//! HTTP controller endpoints for the Holocron web API.
//!
//! This module contains Axum handlers for the catalog listings, user favorites, and the route
//! directory. Controllers extract path parameters, call into repositories or services, and
//! return the matching HTTP responses. Every handler is annotated for utoipa so it appears in
//! the generated OpenAPI document.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
pub mod vehicle;
