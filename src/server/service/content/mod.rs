//! Content service loading the data behind each site page.
//!
//! Every page follows the same contract: build the upstream URL from the route
//! parameters, fetch, and degrade any failure to an empty result. Catalog, story and
//! chapter responses are reused for the revalidation window; search results are
//! always fetched fresh.

pub mod cache;
pub mod client;

use std::{sync::OnceLock, time::Duration};

use dioxus_logger::tracing;

use crate::{
    model::{
        page::{CategoryPageDto, HomePageDto, ReaderPageDto, SearchPageDto, RANKING_SIZE},
        story::{ranking_items, ChapterDto, StoryDetailDto, StoryDto, StoryListDto},
    },
    server::error::content::ContentError,
};

use self::{
    cache::RevalidateCache,
    client::{ContentApiClient, SortBy, StoryQuery},
};

/// Stories per home page section.
const HOME_SECTION_LIMIT: u32 = 10;
/// Stories fetched for category and search listings.
const LISTING_LIMIT: u32 = 50;

/// Instance used while server-rendering pages.
static INSTALLED: OnceLock<ContentService> = OnceLock::new();

/// Loads page payloads from the external content API.
///
/// Cheap to clone: the HTTP client and all caches are reference-counted.
#[derive(Clone)]
pub struct ContentService {
    client: ContentApiClient,
    lists: RevalidateCache<StoryListDto>,
    stories: RevalidateCache<StoryDetailDto>,
    chapters: RevalidateCache<ChapterDto>,
}

impl ContentService {
    /// Creates a content service.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - Content API base URL, e.g. `http://localhost:8001/api/v1`
    /// - `revalidate` - How long cached responses are reused
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, revalidate: Duration) -> Self {
        Self {
            client: ContentApiClient::new(http, base_url),
            lists: RevalidateCache::new(revalidate),
            stories: RevalidateCache::new(revalidate),
            chapters: RevalidateCache::new(revalidate),
        }
    }

    /// Registers this service for server-side page rendering.
    ///
    /// Only the first call takes effect.
    pub fn install(self) {
        if INSTALLED.set(self).is_err() {
            tracing::warn!("Content service already installed, keeping the first instance");
        }
    }

    /// The service registered with [`ContentService::install`], if any.
    pub fn installed() -> Option<&'static ContentService> {
        INSTALLED.get()
    }

    /// Loads the home page: recently updated, most viewed and best rated stories,
    /// fetched concurrently.
    pub async fn home_page(&self) -> HomePageDto {
        let (latest, top_viewed, top_rated) = tokio::join!(
            self.cached_stories(StoryQuery::sorted(SortBy::UpdatedAt, HOME_SECTION_LIMIT)),
            self.cached_stories(StoryQuery::sorted(SortBy::ViewCount, HOME_SECTION_LIMIT)),
            self.cached_stories(StoryQuery::sorted(SortBy::Rating, HOME_SECTION_LIMIT)),
        );

        HomePageDto::from_lists(latest, top_viewed, top_rated)
    }

    /// Loads the stories filed under the category `slug`.
    pub async fn category_page(&self, slug: String) -> CategoryPageDto {
        let stories = self
            .cached_stories(StoryQuery::by_category(slug.as_str(), LISTING_LIMIT))
            .await;

        CategoryPageDto::new(slug, stories)
    }

    /// Searches stories by title. Results bypass the cache, the sidebar does not.
    ///
    /// A blank query skips the search request and yields no results.
    pub async fn search_page(&self, query: String) -> SearchPageDto {
        let term = query.trim();

        let search = async {
            if term.is_empty() {
                return Vec::new();
            }
            let query = StoryQuery::search(term, LISTING_LIMIT);
            match self.client.list_stories(&query).await {
                Ok(list) => list.data,
                Err(err) => {
                    log_failure("search stories", &err);
                    Vec::new()
                }
            }
        };
        let sidebar =
            self.cached_stories(StoryQuery::sorted(SortBy::ViewCount, HOME_SECTION_LIMIT));

        let (results, top_viewed) = tokio::join!(search, sidebar);

        SearchPageDto {
            ranking: ranking_items(&top_viewed, RANKING_SIZE),
            query: term.to_string(),
            results,
        }
    }

    /// Loads a story with its chapters sorted in reading order.
    ///
    /// # Returns
    /// - `Some(StoryDetailDto)` - Story found
    /// - `None` - Story missing upstream, or the request failed
    pub async fn story(&self, slug: &str) -> Option<StoryDetailDto> {
        if let Some(story) = self.stories.get(slug).await {
            tracing::debug!("Story cache hit for {}", slug);
            return Some(story);
        }

        match self.client.get_story(slug).await {
            Ok(story) => {
                let story = story.with_sorted_chapters();
                self.stories.insert(slug.to_string(), story.clone()).await;
                Some(story)
            }
            Err(err) => {
                log_failure("fetch story", &err);
                None
            }
        }
    }

    async fn chapter(&self, id: i64) -> Option<ChapterDto> {
        let key = id.to_string();
        if let Some(chapter) = self.chapters.get(&key).await {
            tracing::debug!("Chapter cache hit for {}", id);
            return Some(chapter);
        }

        match self.client.get_chapter(id).await {
            Ok(chapter) => {
                self.chapters.insert(key, chapter.clone()).await;
                Some(chapter)
            }
            Err(err) => {
                log_failure("fetch chapter", &err);
                None
            }
        }
    }

    /// Loads a chapter together with links to its neighbors in the story.
    ///
    /// The story is fetched alongside the chapter only to locate the previous and
    /// next chapters; when it is unavailable the chapter still renders without them.
    ///
    /// # Returns
    /// - `Some(ReaderPageDto)` - Chapter found
    /// - `None` - Chapter missing upstream, or the request failed
    pub async fn reader_page(&self, slug: &str, chapter_id: i64) -> Option<ReaderPageDto> {
        let (chapter, story) = tokio::join!(self.chapter(chapter_id), self.story(slug));
        let chapter = chapter?;

        let (previous_id, next_id) = story
            .map(|story| story.neighbors(chapter.id))
            .unwrap_or((None, None));

        Some(ReaderPageDto {
            previous_id: if chapter.is_first() { None } else { previous_id },
            next_id,
            chapter,
        })
    }

    /// Story listing through the cache; failures become an empty list.
    async fn cached_stories(&self, query: StoryQuery) -> Vec<StoryDto> {
        let key = match self.client.stories_url(&query) {
            Ok(url) => url.to_string(),
            Err(err) => {
                log_failure("build stories URL", &err);
                return Vec::new();
            }
        };

        if let Some(list) = self.lists.get(&key).await {
            tracing::debug!("Story list cache hit for {}", key);
            return list.data;
        }

        match self.client.list_stories(&query).await {
            Ok(list) => {
                self.lists.insert(key, list.clone()).await;
                list.data
            }
            Err(err) => {
                log_failure("fetch stories", &err);
                Vec::new()
            }
        }
    }
}

fn log_failure(action: &str, err: &ContentError) {
    match err {
        err if err.is_not_found() => tracing::debug!("Failed to {}: {}", action, err),
        ContentError::Status { .. } => tracing::warn!("Failed to {}: {}", action, err),
        err => tracing::error!("Failed to {}: {}", action, err),
    }
}
