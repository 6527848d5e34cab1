use crate::{
    client::{api::path::content_path, model::error::ApiError},
    model::{
        page::{CategoryPageDto, HomePageDto, ReaderPageDto, SearchPageDto},
        story::StoryDetailDto,
    },
};

use super::helper::{get, parse_response, send_request};

/// Get the home page sections
pub async fn get_home_page() -> Result<HomePageDto, ApiError> {
    let response = send_request(get(&content_path(&["home"], &[]))).await?;
    parse_response(response).await
}

/// Get the stories of a category
pub async fn get_category_page(slug: String) -> Result<CategoryPageDto, ApiError> {
    let url = content_path(&["category", &slug], &[]);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Search stories by title
pub async fn get_search_page(q: String) -> Result<SearchPageDto, ApiError> {
    let url = content_path(&["search"], &[("q", &q)]);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Get a story with its chapter list
pub async fn get_story(slug: String) -> Result<StoryDetailDto, ApiError> {
    let url = content_path(&["story", &slug], &[]);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Get a chapter with its neighbors
pub async fn get_reader_page(slug: String, chapter_id: i64) -> Result<ReaderPageDto, ApiError> {
    let url = content_path(&["story", &slug, "chapter", &chapter_id.to_string()], &[]);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
