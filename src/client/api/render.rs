use crate::{
    client::model::error::ApiError,
    model::{
        page::{CategoryPageDto, HomePageDto, ReaderPageDto, SearchPageDto},
        story::StoryDetailDto,
    },
    server::service::content::ContentService,
};

fn service() -> Result<&'static ContentService, ApiError> {
    ContentService::installed().ok_or_else(|| ApiError {
        status: 503,
        message: "Content service is not running".to_string(),
    })
}

/// Get the home page sections
pub async fn get_home_page() -> Result<HomePageDto, ApiError> {
    Ok(service()?.home_page().await)
}

/// Get the stories of a category
pub async fn get_category_page(slug: String) -> Result<CategoryPageDto, ApiError> {
    Ok(service()?.category_page(slug).await)
}

/// Search stories by title
pub async fn get_search_page(q: String) -> Result<SearchPageDto, ApiError> {
    Ok(service()?.search_page(q).await)
}

/// Get a story with its chapter list
pub async fn get_story(slug: String) -> Result<StoryDetailDto, ApiError> {
    service()?
        .story(&slug)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Story {} not found", slug)))
}

/// Get a chapter with its neighbors
pub async fn get_reader_page(slug: String, chapter_id: i64) -> Result<ReaderPageDto, ApiError> {
    service()?
        .reader_page(&slug, chapter_id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Chapter {} not found", chapter_id)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Content API address where nothing listens.
    const DEAD_CONTENT_API: &str = "http://127.0.0.1:9/api/v1";

    fn install() {
        if ContentService::installed().is_none() {
            ContentService::new(
                reqwest::Client::new(),
                DEAD_CONTENT_API,
                Duration::from_secs(3600),
            )
            .install();
        }
    }

    /// Tests that server rendering loads listing pages in-process.
    ///
    /// Expected: Ok with empty sections when the content API is down
    #[tokio::test]
    async fn renders_listing_pages_from_installed_service() {
        install();

        let home = get_home_page().await.unwrap();
        assert!(home.is_empty());

        let category = get_category_page("tien-hiep".to_string()).await.unwrap();
        assert_eq!(category.slug, "tien-hiep");
        assert!(category.stories.is_empty());

        let search = get_search_page("tiên".to_string()).await.unwrap();
        assert_eq!(search.query, "tiên");
        assert!(search.results.is_empty());
    }

    /// Tests that a missing story or chapter renders as not found.
    ///
    /// Expected: Err with status 404
    #[tokio::test]
    async fn missing_story_and_chapter_are_not_found() {
        install();

        let story = get_story("tien-nghich".to_string()).await.unwrap_err();
        assert!(story.is_not_found());

        let chapter = get_reader_page("tien-nghich".to_string(), 1)
            .await
            .unwrap_err();
        assert!(chapter.is_not_found());
    }
}
