//! Retrying object-store fetch.
//!
//! This module encapsulates classification of raw store responses
//! (not-found, retryable upstream error, unreachable) and the bounded
//! retry loop, so the loader sees exactly one terminal outcome per load.

mod classify;
mod run;

pub use classify::{classify, Classification};
pub use run::fetch_with_retry;

use bytes::Bytes;

/// Terminal outcome of one load's fetch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Full object body.
    Success(Bytes),
    /// The store reported a clean 404 for the object.
    NotFound,
    /// A status-coded store error, possibly after exhausting retries.
    UpstreamError,
    /// The store was unreachable: no response metadata at all.
    TransportFailure,
}
