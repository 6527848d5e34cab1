//! JSON endpoints feeding the site pages.
//!
//! Upstream failures never surface as errors here: listings come back empty and
//! only a missing story or chapter maps to 404.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{error::AppError, state::AppState};

#[derive(Deserialize, Default)]
pub struct SearchParam {
    #[serde(default)]
    pub q: String,
}

/// GET /api/content/home
pub async fn get_home_page(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.content.home_page().await))
}

/// GET /api/content/category/{slug}
pub async fn get_category_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.content.category_page(slug).await))
}

/// GET /api/content/search?q= - Search stories by title
///
/// A missing or blank `q` returns an empty result list.
pub async fn get_search_page(
    State(state): State<AppState>,
    Query(param): Query<SearchParam>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.content.search_page(param.q).await))
}

/// GET /api/content/story/{slug}
///
/// # Returns
/// - `200 OK`: StoryDetailDto with chapters in reading order
/// - `404 Not Found`: Story missing or the content API unavailable
pub async fn get_story(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let story = state
        .content
        .story(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Story {} not found", slug)))?;

    Ok((StatusCode::OK, Json(story)))
}

/// GET /api/content/story/{slug}/chapter/{id}
///
/// # Returns
/// - `200 OK`: ReaderPageDto with previous and next chapter ids
/// - `404 Not Found`: Chapter missing or the content API unavailable
pub async fn get_reader_page(
    State(state): State<AppState>,
    Path((slug, chapter_id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let page = state
        .content
        .reader_page(&slug, chapter_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Chapter {} not found", chapter_id)))?;

    Ok((StatusCode::OK, Json(page)))
}
