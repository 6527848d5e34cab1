//! Shaped payloads served to the site pages, one per route.

use serde::{Deserialize, Serialize};

use crate::model::story::{ranking_items, CategoryDto, ChapterDto, RankingItemDto, StoryDto};

/// Number of stories rotated through the featured carousel.
pub const FEATURED_COUNT: usize = 6;
/// Number of entries in a ranking sidebar.
pub const RANKING_SIZE: usize = 10;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct HomePageDto {
    pub featured: Vec<StoryDto>,
    pub top_viewed: Vec<StoryDto>,
    pub top_rated: Vec<StoryDto>,
    pub latest: Vec<StoryDto>,
    pub ranking: Vec<RankingItemDto>,
}

impl HomePageDto {
    /// Builds the home page from the three catalog lists.
    ///
    /// The carousel and the ranking sidebar are both drawn from the most viewed
    /// stories.
    pub fn from_lists(
        latest: Vec<StoryDto>,
        top_viewed: Vec<StoryDto>,
        top_rated: Vec<StoryDto>,
    ) -> Self {
        Self {
            featured: top_viewed.iter().take(FEATURED_COUNT).cloned().collect(),
            ranking: ranking_items(&top_viewed, RANKING_SIZE),
            top_viewed,
            top_rated,
            latest,
        }
    }

    /// True when the catalog returned nothing to show.
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct CategoryPageDto {
    pub slug: String,
    pub name: String,
    pub stories: Vec<StoryDto>,
    pub ranking: Vec<RankingItemDto>,
}

impl CategoryPageDto {
    pub fn new(slug: String, stories: Vec<StoryDto>) -> Self {
        let name = category_display_name(&stories, &slug);
        Self {
            ranking: ranking_items(&stories, RANKING_SIZE),
            slug,
            name,
            stories,
        }
    }
}

/// Human readable name for a category slug.
///
/// Prefers the name the first story gives for the matching category, otherwise
/// turns the slug itself into words.
pub fn category_display_name(stories: &[StoryDto], slug: &str) -> String {
    stories
        .first()
        .and_then(|story| story.categories.iter().find(|c| c.slug == slug))
        .map(|c: &CategoryDto| c.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| slug.replace('-', " "))
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct SearchPageDto {
    pub query: String,
    pub results: Vec<StoryDto>,
    pub ranking: Vec<RankingItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct ReaderPageDto {
    pub chapter: ChapterDto,
    pub previous_id: Option<i64>,
    pub next_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: i64, categories: Vec<CategoryDto>) -> StoryDto {
        StoryDto {
            id,
            title: format!("Story {}", id),
            slug: format!("story-{}", id),
            categories,
            ..Default::default()
        }
    }

    #[test]
    fn home_page_features_and_ranks_top_viewed() {
        let top_viewed: Vec<StoryDto> = (1..=10).map(|id| story(id, vec![])).collect();

        let page = HomePageDto::from_lists(vec![story(99, vec![])], top_viewed, vec![]);

        assert_eq!(page.featured.len(), FEATURED_COUNT);
        assert_eq!(page.featured[0].id, 1);
        assert_eq!(page.ranking.len(), 10);
        assert!(!page.is_empty());
    }

    #[test]
    fn home_page_without_latest_is_empty() {
        let page = HomePageDto::from_lists(vec![], vec![], vec![]);

        assert!(page.is_empty());
        assert!(page.featured.is_empty());
        assert!(page.ranking.is_empty());
    }

    #[test]
    fn category_name_comes_from_matching_category() {
        let stories = vec![story(
            1,
            vec![
                CategoryDto {
                    id: 1,
                    name: "Huyền Huyễn".to_string(),
                    slug: "huyen-huyen".to_string(),
                },
                CategoryDto {
                    id: 2,
                    name: "Tiên Hiệp".to_string(),
                    slug: "tien-hiep".to_string(),
                },
            ],
        )];

        assert_eq!(category_display_name(&stories, "tien-hiep"), "Tiên Hiệp");
    }

    #[test]
    fn category_name_falls_back_to_slug_words() {
        assert_eq!(category_display_name(&[], "do-thi"), "do thi");

        let stories = vec![story(1, vec![])];
        assert_eq!(category_display_name(&stories, "kiem-hiep"), "kiem hiep");
    }

    #[test]
    fn category_page_ranks_leading_stories() {
        let stories: Vec<StoryDto> = (1..=15).map(|id| story(id, vec![])).collect();

        let page = CategoryPageDto::new("do-thi".to_string(), stories);

        assert_eq!(page.name, "do thi");
        assert_eq!(page.stories.len(), 15);
        assert_eq!(page.ranking.len(), RANKING_SIZE);
    }
}
