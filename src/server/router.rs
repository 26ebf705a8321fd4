//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{
    routing::{delete, get},
    Extension, Router,
};
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, sitemap::DOCS_PATH},
    model::app::AppState,
};

/// Misspelled character favorite removal path still used by older clients
const LEGACY_REMOVE_FAVORITE_CHARACTER_PATH: &str =
    "/users/{user_id}/poeple/{character_id}/favorite";

/// Builds the application's API routes along with their OpenAPI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document. The same document drives the route directory served at `/`.
///
/// # Registered Endpoints
/// - `GET /` - Directory of documented routes
/// - `GET /user` - Static greeting
/// - `GET /users`, `GET /users/{user_id}/favorites` - Users and their favorites
/// - `GET /people`, `GET /people/{people_id}` - Characters
/// - `GET /planets`, `GET /planets/{planet_id}` - Planets
/// - `GET /vehicles`, `GET /vehicles/{vehicle_id}` - Vehicles
/// - `POST /users/{user_id}/favorite/{planet,people,vehicle}/{id}` - Add a favorite
/// - `DELETE /users/{user_id}/{planet,people,vehicle}/{id}/favorite` - Remove a favorite
///
/// The legacy `/users/{user_id}/poeple/{character_id}/favorite` removal path is routed but
/// left out of the OpenAPI document.
///
/// # Returns
/// The `Router<AppState>` with every API route registered, plus the OpenAPI document
/// describing it. Unknown paths answer with a JSON 404 and unsupported methods on known
/// paths with a JSON 405.
pub fn routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::people::PEOPLE_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_greeting))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::people::get_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::vehicle::get_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle))
        .routes(routes!(controller::favorite::add_favorite_planet))
        .routes(routes!(controller::favorite::add_favorite_character))
        .routes(routes!(controller::favorite::add_favorite_vehicle))
        .routes(routes!(controller::favorite::remove_favorite_planet))
        .routes(routes!(controller::favorite::remove_favorite_character))
        .routes(routes!(controller::favorite::remove_favorite_vehicle))
        .split_for_parts();

    let sitemap = controller::sitemap::build_sitemap(&api);

    let routes = routes
        .route(
            "/",
            get(controller::sitemap::get_sitemap).layer(Extension(sitemap)),
        )
        .route(
            LEGACY_REMOVE_FAVORITE_CHARACTER_PATH,
            delete(controller::favorite::remove_favorite_character),
        )
        .fallback(controller::sitemap::not_found)
        .method_not_allowed_fallback(controller::sitemap::method_not_allowed);

    (routes, api)
}

/// Builds the complete service ready to be served.
///
/// API routes are bound to `state` and have trailing slashes trimmed before routing. Swagger
/// UI is mounted ahead of them at `/api/docs`, with the OpenAPI document at
/// `/api/docs/openapi.json`, and is left unnormalized since it redirects `/api/docs` to
/// `/api/docs/`. Every request is traced and answered with permissive CORS headers.
pub fn app(state: AppState) -> Router {
    let (routes, api) = routes();

    let api_service = NormalizePathLayer::trim_trailing_slash().layer(routes.with_state(state));

    Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url("/api/docs/openapi.json", api))
        .fallback_service(api_service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
