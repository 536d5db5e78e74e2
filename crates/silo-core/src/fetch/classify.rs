//! Classify raw store responses into terminal outcomes or retry candidates.

use super::FetchOutcome;
use crate::store::StoreResponse;

/// What the retry loop should do with one attempt's response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Stop now with this outcome.
    Terminal(FetchOutcome),
    /// Retry if budget remains; otherwise terminal upstream error.
    Retryable,
}

/// Classifies a single store response.
///
/// The store reports missing objects and throttling as status-coded data,
/// so this is a pure structural decision:
///
/// - `Unreachable` is terminal (no retry). The store gave us nothing to
///   base a retry decision on; whether it should be retried like other
///   upstream errors is an open policy question, and the established
///   behavior is to fail fast.
/// - Status 404 is a terminal not-found.
/// - Any other error, with or without a status, is retryable.
/// - A body is terminal success.
pub fn classify(response: StoreResponse) -> Classification {
    match response {
        StoreResponse::Unreachable => Classification::Terminal(FetchOutcome::TransportFailure),
        StoreResponse::Error {
            status: Some(404), ..
        } => Classification::Terminal(FetchOutcome::NotFound),
        StoreResponse::Error { .. } => Classification::Retryable,
        StoreResponse::Body(bytes) => Classification::Terminal(FetchOutcome::Success(bytes)),
    }
}
