use crate::client::model::error::ApiError;

/// Load state of a page payload fetched from the site API.
#[derive(Clone, Debug, PartialEq)]
pub enum Cache<T> {
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T: Clone> Cache<T> {
    /// Snapshot of a pending request: `None` means the request is still in flight.
    pub fn from_result(result: Option<&Result<T, ApiError>>) -> Self {
        match result {
            None => Cache::Loading,
            Some(Ok(data)) => Cache::Fetched(data.clone()),
            Some(Err(err)) => Cache::Error(err.clone()),
        }
    }
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Cache::Error(err) if err.is_not_found())
    }
}
