//! Relative URLs of the site's page data endpoints.

use url::Url;

/// Placeholder origin used only to run segment and query encoding.
const ORIGIN: &str = "http://site.invalid";

/// Builds `/api/content/{segments...}?{query}` with every part percent-encoded.
pub fn content_path(segments: &[&str], query: &[(&str, &str)]) -> String {
    let Ok(mut url) = Url::parse(ORIGIN) else {
        return String::new();
    };

    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(["api", "content"]).extend(segments);
    }
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
