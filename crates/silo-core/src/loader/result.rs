//! The uniform load result handed back to the host.

use bytes::Bytes;
use thiserror::Error;

use crate::fetch::FetchOutcome;

/// Why a load failed, in terms the host can map to its own status codes
/// (typically 404 or 502).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadErrorKind {
    /// Object absent, or its bucket failed validation.
    #[error("not found")]
    NotFound,
    /// Origin unreachable, malformed response, or retries exhausted.
    #[error("upstream failure")]
    Upstream,
}

/// Terminal value for one load. Exactly one is produced per request;
/// `successful` is only set when the complete body was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub successful: bool,
    pub error: Option<LoadErrorKind>,
    pub buffer: Option<Bytes>,
}

impl LoadResult {
    pub fn success(buffer: Bytes) -> Self {
        Self {
            successful: true,
            error: None,
            buffer: Some(buffer),
        }
    }

    pub fn not_found() -> Self {
        Self {
            successful: false,
            error: Some(LoadErrorKind::NotFound),
            buffer: None,
        }
    }

    pub fn upstream() -> Self {
        Self {
            successful: false,
            error: Some(LoadErrorKind::Upstream),
            buffer: None,
        }
    }
}

impl FetchOutcome {
    /// Total mapping from fetch outcomes to the host contract. Transport
    /// failures and exhausted retries both surface as upstream errors.
    pub fn into_load_result(self) -> LoadResult {
        match self {
            FetchOutcome::Success(bytes) => LoadResult::success(bytes),
            FetchOutcome::NotFound => LoadResult::not_found(),
            FetchOutcome::UpstreamError | FetchOutcome::TransportFailure => {
                LoadResult::upstream()
            }
        }
    }
}
