pub static SITE_NAME: &str = "METRUYEN";

/// Delay between automatic carousel slides.
pub const CAROUSEL_INTERVAL_MS: u32 = 8_000;

pub static NOT_FOUND_STORY: &str = "Truyện không tồn tại hoặc đã bị xóa.";
pub static NOT_FOUND_CHAPTER: &str = "Chương không tồn tại.";
