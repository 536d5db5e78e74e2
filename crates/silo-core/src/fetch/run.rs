//! Bounded retry loop around the object store client.

use tracing::error;

use super::classify::{classify, Classification};
use super::FetchOutcome;
use crate::object_key::ObjectKey;
use crate::store::{ObjectStore, StoreResponse};

/// Fetches one object, retrying retryable errors up to `max_retry` extra
/// attempts after the first. `max_retry = 0` means exactly one attempt.
///
/// Attempts are strictly sequential within the calling task; the attempt
/// counter is local, so concurrent loads never share retry state. Each
/// failed attempt (including the final one) is logged before the retry
/// decision. Retries are immediate, with no backoff delay.
pub async fn fetch_with_retry<S>(store: &S, key: &ObjectKey, max_retry: u32) -> FetchOutcome
where
    S: ObjectStore + ?Sized,
{
    let mut attempt: u32 = 0;
    loop {
        let response = match store.get(key).await {
            StoreResponse::Body(bytes) => return FetchOutcome::Success(bytes),
            failure => failure,
        };

        error!(
            key = %key,
            attempt,
            "object store fetch failed: {:?}",
            response
        );

        match classify(response) {
            Classification::Terminal(outcome) => return outcome,
            Classification::Retryable => {
                if attempt < max_retry {
                    attempt += 1;
                } else {
                    return FetchOutcome::UpstreamError;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing::instrument::WithSubscriber;
    use tracing_subscriber::layer::{Context as LayerContext, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Store that replays a scripted response per attempt and counts calls.
    /// The last scripted response repeats once the script runs out.
    struct ScriptedStore {
        script: Mutex<Vec<StoreResponse>>,
        calls: AtomicUsize,
    }

    impl ScriptedStore {
        fn new(script: Vec<StoreResponse>) -> Self {
            Self {
                script: Mutex::new(script),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ObjectStore for ScriptedStore {
        async fn get(&self, _key: &ObjectKey) -> StoreResponse {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let script = self.script.lock().unwrap();
            script.get(n).unwrap_or_else(|| script.last().unwrap()).clone()
        }
    }

    fn key() -> ObjectKey {
        ObjectKey {
            bucket: "images".to_string(),
            key: "photo.jpg".to_string(),
        }
    }

    fn upstream_error() -> StoreResponse {
        StoreResponse::Error {
            status: Some(500),
            message: "internal error".to_string(),
        }
    }

    #[tokio::test]
    async fn body_on_first_call_is_success_with_one_call() {
        let store = ScriptedStore::new(vec![StoreResponse::Body(Bytes::from_static(b"img"))]);
        let outcome = fetch_with_retry(&store, &key(), 3).await;
        assert_eq!(outcome, FetchOutcome::Success(Bytes::from_static(b"img")));
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn not_found_stops_immediately_despite_budget() {
        let store = ScriptedStore::new(vec![StoreResponse::Error {
            status: Some(404),
            message: "no such key".to_string(),
        }]);
        let outcome = fetch_with_retry(&store, &key(), 5).await;
        assert_eq!(outcome, FetchOutcome::NotFound);
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn unreachable_is_not_retried() {
        let store = ScriptedStore::new(vec![StoreResponse::Unreachable]);
        let outcome = fetch_with_retry(&store, &key(), 5).await;
        assert_eq!(outcome, FetchOutcome::TransportFailure);
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn zero_budget_means_exactly_one_attempt() {
        let store = ScriptedStore::new(vec![upstream_error()]);
        let outcome = fetch_with_retry(&store, &key(), 0).await;
        assert_eq!(outcome, FetchOutcome::UpstreamError);
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test]
    async fn persistent_errors_exhaust_budget_of_two_in_three_calls() {
        let store = ScriptedStore::new(vec![upstream_error()]);
        let outcome = fetch_with_retry(&store, &key(), 2).await;
        assert_eq!(outcome, FetchOutcome::UpstreamError);
        assert_eq!(store.calls(), 3);
    }

    #[tokio::test]
    async fn error_then_body_succeeds_on_second_call() {
        let store = ScriptedStore::new(vec![
            upstream_error(),
            StoreResponse::Body(Bytes::from_static(b"img")),
        ]);
        let outcome = fetch_with_retry(&store, &key(), 1).await;
        assert_eq!(outcome, FetchOutcome::Success(Bytes::from_static(b"img")));
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn mid_sequence_404_stops_retrying() {
        let store = ScriptedStore::new(vec![
            upstream_error(),
            StoreResponse::Error {
                status: Some(404),
                message: "gone".to_string(),
            },
        ]);
        let outcome = fetch_with_retry(&store, &key(), 5).await;
        assert_eq!(outcome, FetchOutcome::NotFound);
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn large_budget_terminates_after_budget_plus_one_calls() {
        let store = ScriptedStore::new(vec![upstream_error()]);
        let _ = fetch_with_retry(&store, &key(), 7).await;
        assert_eq!(store.calls(), 8);
    }

    /// Counts ERROR-level events seen while a subscriber scope is active.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: LayerContext<'_, S>) {
            if event.metadata().level() == &tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn every_failed_attempt_emits_one_error_event() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(Arc::clone(&errors)));

        let store = ScriptedStore::new(vec![upstream_error()]);
        let outcome = fetch_with_retry(&store, &key(), 2)
            .with_subscriber(subscriber)
            .await;

        assert_eq!(outcome, FetchOutcome::UpstreamError);
        assert_eq!(store.calls(), 3);
        // One log line per failed attempt, the final one included.
        assert_eq!(errors.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn successful_fetch_emits_no_error_events() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(Arc::clone(&errors)));

        let store = ScriptedStore::new(vec![StoreResponse::Body(Bytes::from_static(b"img"))]);
        let outcome = fetch_with_retry(&store, &key(), 2)
            .with_subscriber(subscriber)
            .await;

        assert_eq!(outcome, FetchOutcome::Success(Bytes::from_static(b"img")));
        assert_eq!(errors.load(Ordering::SeqCst), 0);
    }
}
