pub mod category;
pub mod home;
pub mod not_found;
pub mod reader;
pub mod search;
pub mod story;

pub use category::Category;
pub use home::Home;
pub use not_found::NotFound;
pub use reader::Reader;
pub use search::Search;
pub use story::StoryDetail;
