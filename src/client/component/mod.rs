pub mod carousel;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod ranking_sidebar;
pub mod story_card;

pub use carousel::FeaturedCarousel;
pub use layout::Layout;
pub use navbar::Navbar;
pub use page::{EmptyState, LoadingPage, NotFoundPage, Page};
pub use ranking_sidebar::RankingSidebar;
pub use story_card::{StoryCard, StoryGrid};
