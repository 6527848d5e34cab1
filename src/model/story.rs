//! Story, chapter and category shapes returned by the external content API.
//!
//! The content API is not owned by this application, so every field decodes
//! leniently: anything missing falls back to its default instead of failing the
//! whole payload.

use serde::{Deserialize, Serialize};

/// Author shown when a story carries no author record.
pub const UNKNOWN_AUTHOR: &str = "Ẩn danh";

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct AuthorDto {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct StoryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub status: String,
    pub view_count: u64,
    pub vote_count: u64,
    pub word_count: u64,
    pub chapter_count: u64,
    pub rating: f64,
    pub author_obj: Option<AuthorDto>,
    pub categories: Vec<CategoryDto>,
}

impl StoryDto {
    /// First category of the story, used for the card badge.
    pub fn main_category(&self) -> Option<&CategoryDto> {
        self.categories.first()
    }

    pub fn author_name(&self) -> &str {
        self.author_obj
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Rating with one decimal, or `None` when the story is unrated.
    pub fn rating_label(&self) -> Option<String> {
        if self.rating > 0.0 {
            Some(format!("{:.1}", self.rating))
        } else {
            None
        }
    }
}

/// Paged list envelope of `GET /stories`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct StoryListDto {
    pub data: Vec<StoryDto>,
    pub total: u64,
}

/// Chapter entry inside a story detail payload.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[serde(default)]
pub struct ChapterSummaryDto {
    pub id: i64,
    pub title: String,
    pub ordering: i64,
}

impl ChapterSummaryDto {
    /// Chapter number zero-padded to two digits.
    pub fn number_label(&self) -> String {
        format!("{:02}", self.ordering)
    }
}

/// Payload of `GET /stories/{slug}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct StoryDetailDto {
    #[serde(flatten)]
    pub story: StoryDto,
    pub chapters: Vec<ChapterSummaryDto>,
}

impl StoryDetailDto {
    /// Returns the detail with its chapters sorted ascending by `ordering`.
    pub fn with_sorted_chapters(mut self) -> Self {
        sort_chapters(&mut self.chapters);
        self
    }

    /// Ids of the chapters before and after `chapter_id` in reading order.
    ///
    /// Expects the chapters to already be sorted. Returns `(None, None)` when the
    /// chapter is not part of this story.
    pub fn neighbors(&self, chapter_id: i64) -> (Option<i64>, Option<i64>) {
        let Some(position) = self.chapters.iter().position(|c| c.id == chapter_id) else {
            return (None, None);
        };

        let previous = position
            .checked_sub(1)
            .and_then(|i| self.chapters.get(i))
            .map(|c| c.id);
        let next = self.chapters.get(position + 1).map(|c| c.id);

        (previous, next)
    }
}

/// Sorts chapters ascending by `ordering`, keeping input order for ties.
pub fn sort_chapters(chapters: &mut [ChapterSummaryDto]) {
    chapters.sort_by_key(|c| c.ordering);
}

/// Story reference embedded in a chapter payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct StoryRefDto {
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
}

/// Payload of `GET /chapters/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(default)]
pub struct ChapterDto {
    pub id: i64,
    pub story_id: i64,
    pub title: String,
    pub ordering: i64,
    pub content: String,
    pub story: Option<StoryRefDto>,
}

impl ChapterDto {
    pub fn heading(&self) -> String {
        format!("Chương {}: {}", self.ordering, self.title)
    }

    /// The first chapter has nothing before it.
    pub fn is_first(&self) -> bool {
        self.ordering <= 1
    }
}

/// Entry of the ranking sidebar.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct RankingItemDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub view_count: u64,
}

impl From<&StoryDto> for RankingItemDto {
    fn from(story: &StoryDto) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            slug: story.slug.clone(),
            view_count: story.view_count,
        }
    }
}

/// Maps the first `limit` stories to ranking entries, keeping their order.
pub fn ranking_items(stories: &[StoryDto], limit: usize) -> Vec<RankingItemDto> {
    stories.iter().take(limit).map(RankingItemDto::from).collect()
}

/// Formats a count with `.` thousands separators, e.g. `1234567` -> `1.234.567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chapter(id: i64, ordering: i64) -> ChapterSummaryDto {
        ChapterSummaryDto {
            id,
            title: format!("Chapter {}", id),
            ordering,
        }
    }

    #[test]
    fn decodes_story_with_missing_fields() {
        let story: StoryDto =
            serde_json::from_str(r#"{"id": 7, "title": "Tiên Nghịch", "slug": "tien-nghich"}"#)
                .unwrap();

        assert_eq!(story.id, 7);
        assert_eq!(story.chapter_count, 0);
        assert!(story.categories.is_empty());
        assert_eq!(story.author_name(), UNKNOWN_AUTHOR);
        assert_eq!(story.rating_label(), None);
    }

    #[test]
    fn decodes_story_detail_with_flattened_story() {
        let detail: StoryDetailDto = serde_json::from_str(
            r#"{
                "id": 1, "title": "A", "slug": "a", "rating": 4.56,
                "author_obj": {"id": 3, "name": "Nhĩ Căn"},
                "chapters": [{"id": 11, "title": "Two", "ordering": 2},
                             {"id": 10, "title": "One", "ordering": 1}]
            }"#,
        )
        .unwrap();

        assert_eq!(detail.story.slug, "a");
        assert_eq!(detail.story.author_name(), "Nhĩ Căn");
        assert_eq!(detail.story.rating_label().as_deref(), Some("4.6"));
        assert_eq!(detail.chapters.len(), 2);
    }

    #[test]
    fn sorts_chapters_by_ordering() {
        let detail = StoryDetailDto {
            story: StoryDto::default(),
            chapters: vec![chapter(3, 3), chapter(1, 1), chapter(2, 2)],
        }
        .with_sorted_chapters();

        let order: Vec<i64> = detail.chapters.iter().map(|c| c.ordering).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn finds_neighbor_chapters() {
        let detail = StoryDetailDto {
            story: StoryDto::default(),
            chapters: vec![chapter(30, 3), chapter(10, 1), chapter(20, 2)],
        }
        .with_sorted_chapters();

        assert_eq!(detail.neighbors(10), (None, Some(20)));
        assert_eq!(detail.neighbors(20), (Some(10), Some(30)));
        assert_eq!(detail.neighbors(30), (Some(20), None));
        assert_eq!(detail.neighbors(99), (None, None));
    }

    #[test]
    fn pads_chapter_numbers_to_two_digits() {
        assert_eq!(chapter(1, 7).number_label(), "07");
        assert_eq!(chapter(1, 123).number_label(), "123");
    }

    #[test]
    fn chapter_heading_and_first_flag() {
        let chapter = ChapterDto {
            title: "Khởi đầu".to_string(),
            ordering: 1,
            ..Default::default()
        };

        assert_eq!(chapter.heading(), "Chương 1: Khởi đầu");
        assert!(chapter.is_first());
    }

    #[test]
    fn ranking_takes_leading_stories_in_order() {
        let stories: Vec<StoryDto> = (1..=12)
            .map(|id| StoryDto {
                id,
                view_count: id as u64 * 10,
                ..Default::default()
            })
            .collect();

        let ranking = ranking_items(&stories, 10);

        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0].id, 1);
        assert_eq!(ranking[9].view_count, 100);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    proptest! {
        #[test]
        fn sorted_chapters_are_ascending_regardless_of_input_order(
            orderings in proptest::collection::vec(-50i64..500, 0..64)
        ) {
            let mut chapters: Vec<ChapterSummaryDto> = orderings
                .iter()
                .enumerate()
                .map(|(i, o)| chapter(i as i64, *o))
                .collect();

            sort_chapters(&mut chapters);

            prop_assert_eq!(chapters.len(), orderings.len());
            prop_assert!(chapters.windows(2).all(|w| w[0].ordering <= w[1].ordering));
        }
    }
}
