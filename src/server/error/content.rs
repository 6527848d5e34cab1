use thiserror::Error;

/// Failures talking to the external content API.
///
/// These never reach a page as an error: the content service logs them and
/// substitutes an empty result.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The request could not be sent or the connection failed.
    #[error("Content API request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The content API answered with a non-success status.
    #[error("Content API returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body could not be decoded into the expected shape.
    #[error("Failed to decode content API response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The base URL and path did not form a valid URL.
    #[error("Invalid content API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ContentError {
    /// Whether the upstream reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
