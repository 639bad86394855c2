use serde::{Deserialize, Serialize};

/// Snapshot of an asynchronous query: where it is in its lifecycle and the
/// payload it has produced so far.
///
/// `data: None` on a settled query is a legitimate "resolved but empty"
/// value and is distinct from `is_loading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStatus<T> {
    pub is_loading: bool,
    pub is_fetching: bool,
    pub is_success: bool,
    pub is_error: bool,
    pub data: Option<T>,
}

impl<T> QueryStatus<T> {
    /// First fetch in flight, nothing fetched yet.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            is_fetching: true,
            is_success: false,
            is_error: false,
            data: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            is_loading: false,
            is_fetching: false,
            is_success: true,
            is_error: false,
            data: Some(data),
        }
    }

    /// Settled data with a background refetch in flight.
    pub fn refetching(data: T) -> Self {
        Self {
            is_fetching: true,
            ..Self::success(data)
        }
    }

    pub fn error() -> Self {
        Self {
            is_loading: false,
            is_fetching: false,
            is_success: false,
            is_error: true,
            data: None,
        }
    }

    /// The most recent fetch failed but an earlier payload is still cached.
    pub fn error_with_stale(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::error()
        }
    }

    /// Collapses a fetch result into an envelope. Failures carry no data.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(_) => Self::error(),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Loading and success never overlap, neither do error and success.
    pub fn is_consistent(&self) -> bool {
        !(self.is_loading && self.is_success) && !(self.is_error && self.is_success)
    }
}
