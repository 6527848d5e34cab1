//! HTTP client for the external content API.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    model::story::{ChapterDto, StoryDetailDto, StoryListDto},
    server::error::content::ContentError,
};

/// Sort orders understood by `GET /stories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    UpdatedAt,
    ViewCount,
    Rating,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdatedAt => "updated_at",
            Self::ViewCount => "view_count",
            Self::Rating => "rating",
        }
    }
}

/// Query parameters for `GET /stories`. Unset filters are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryQuery {
    pub sort_by: Option<SortBy>,
    pub limit: u32,
    pub category_slug: Option<String>,
    pub q: Option<String>,
}

impl StoryQuery {
    pub fn sorted(sort_by: SortBy, limit: u32) -> Self {
        Self {
            sort_by: Some(sort_by),
            limit,
            ..Default::default()
        }
    }

    pub fn by_category(slug: impl Into<String>, limit: u32) -> Self {
        Self {
            category_slug: Some(slug.into()),
            limit,
            ..Default::default()
        }
    }

    pub fn search(q: impl Into<String>, limit: u32) -> Self {
        Self {
            q: Some(q.into()),
            limit,
            ..Default::default()
        }
    }
}

/// Thin wrapper around `reqwest::Client` bound to the content API base URL.
///
/// Cheap to clone: the reqwest client is reference-counted internally.
#[derive(Clone)]
pub struct ContentApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentApiClient {
    /// Creates a client for the API rooted at `base_url` (e.g. `http://host/api/v1`).
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ContentError> {
        let mut url = Url::parse(&self.base_url)?;
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// URL of the story listing for `query`. Also used as its cache key.
    pub fn stories_url(&self, query: &StoryQuery) -> Result<Url, ContentError> {
        let mut url = self.endpoint(&["stories"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(sort_by) = query.sort_by {
                pairs.append_pair("sort_by", sort_by.as_str());
            }
            pairs.append_pair("limit", &query.limit.to_string());
            if let Some(slug) = &query.category_slug {
                pairs.append_pair("category_slug", slug);
            }
            if let Some(q) = &query.q {
                pairs.append_pair("q", q);
            }
        }
        Ok(url)
    }

    pub fn story_url(&self, slug: &str) -> Result<Url, ContentError> {
        self.endpoint(&["stories", slug])
    }

    pub fn chapter_url(&self, id: i64) -> Result<Url, ContentError> {
        self.endpoint(&["chapters", &id.to_string()])
    }

    /// Issues a GET and decodes a JSON body.
    ///
    /// # Returns
    /// - `Ok(T)` - 2xx response decoded into `T`
    /// - `Err(ContentError::Request)` - Network failure or timeout
    /// - `Err(ContentError::Status)` - Non-success status code
    /// - `Err(ContentError::Decode)` - Body was not the expected JSON
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ContentError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ContentError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ContentError::Decode {
                url: url.to_string(),
                source,
            })
    }

    pub async fn list_stories(&self, query: &StoryQuery) -> Result<StoryListDto, ContentError> {
        self.fetch_json(self.stories_url(query)?).await
    }

    pub async fn get_story(&self, slug: &str) -> Result<StoryDetailDto, ContentError> {
        self.fetch_json(self.story_url(slug)?).await
    }

    pub async fn get_chapter(&self, id: i64) -> Result<ChapterDto, ContentError> {
        self.fetch_json(self.chapter_url(id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContentApiClient {
        ContentApiClient::new(reqwest::Client::new(), "http://content.local/api/v1")
    }

    #[test]
    fn builds_sorted_listing_url() {
        let url = client()
            .stories_url(&StoryQuery::sorted(SortBy::ViewCount, 10))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://content.local/api/v1/stories?sort_by=view_count&limit=10"
        );
    }

    #[test]
    fn builds_category_listing_url() {
        let url = client()
            .stories_url(&StoryQuery::by_category("tien-hiep", 50))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://content.local/api/v1/stories?limit=50&category_slug=tien-hiep"
        );
    }

    #[test]
    fn encodes_search_query() {
        let url = client()
            .stories_url(&StoryQuery::search("đấu phá & thương khung", 50))
            .unwrap();

        let q = url
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned());
        assert_eq!(q.as_deref(), Some("đấu phá & thương khung"));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn encodes_slug_as_single_segment() {
        let url = client().story_url("a/b").unwrap();

        assert_eq!(url.as_str(), "http://content.local/api/v1/stories/a%2Fb");
    }

    #[test]
    fn builds_chapter_url() {
        let url = client().chapter_url(42).unwrap();

        assert_eq!(url.as_str(), "http://content.local/api/v1/chapters/42");
    }
}
