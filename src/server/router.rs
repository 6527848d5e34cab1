use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        content::{
            get_category_page, get_home_page, get_reader_page, get_search_page, get_story,
        },
        hello::{__path_get_hello, __path_get_welcome, get_hello, get_welcome},
        user::{__path_get_user, get_user},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "METRUYEN API",
        description = "Greeting endpoints and user account lookups."
    ),
    tags(
        (name = "hello", description = "Greeting endpoints"),
        (name = "user", description = "User account lookups")
    )
)]
pub struct ApiDoc;

/// REST API routes with Swagger UI at `/api` and permissive CORS.
pub fn api_router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_hello))
        .routes(routes!(get_welcome))
        .routes(routes!(get_user))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// Page data routes merged into the site server.
pub fn content_router() -> Router<AppState> {
    Router::new()
        .route("/api/content/home", get(get_home_page))
        .route("/api/content/category/{slug}", get(get_category_page))
        .route("/api/content/search", get(get_search_page))
        .route("/api/content/story/{slug}", get(get_story))
        .route(
            "/api/content/story/{slug}/chapter/{id}",
            get(get_reader_page),
        )
}
