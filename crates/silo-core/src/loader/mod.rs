//! Load orchestration: origin selection, bucket validation, fetch dispatch.
//!
//! `Loader` owns the wiring for one configuration: it decides per request
//! whether bytes come from the HTTP delegate or the object store, and for
//! store loads resolves and validates the bucket before running the
//! retrying fetch. All failures are folded into a `LoadResult`; nothing
//! propagates to the host as an error.

mod origin;
mod result;

pub use origin::{select_origin, Origin};
pub use result::{LoadErrorKind, LoadResult};

use tracing::{debug, warn};

use crate::config::SiloConfig;
use crate::fetch::fetch_with_retry;
use crate::http_origin::HttpOrigin;
use crate::object_key::{self, ObjectKey};
use crate::store::ObjectStore;

/// One configured loader. The HTTP delegate and store client are injected
/// so hosts (and tests) control both collaborators explicitly.
pub struct Loader<S, H> {
    config: SiloConfig,
    store: S,
    http: H,
}

impl<S, H> Loader<S, H>
where
    S: ObjectStore,
    H: HttpOrigin,
{
    pub fn new(config: SiloConfig, store: S, http: H) -> Self {
        Self {
            config,
            store,
            http,
        }
    }

    /// Loads the bytes for one request URL. Produces exactly one result;
    /// a disallowed or unresolvable bucket short-circuits to not-found
    /// without touching the store.
    pub async fn load(&self, url: &str) -> LoadResult {
        if let Origin::Http = select_origin(&self.config, url) {
            debug!(url, "delegating load to HTTP origin");
            return self.http.load(url).await;
        }

        let key = match object_key::resolve(&self.config, url) {
            Some(key) => key,
            None => {
                warn!(url, "no bucket/key could be resolved from request");
                return LoadResult::not_found();
            }
        };

        if !object_key::bucket_is_allowed(&self.config, &key.bucket) {
            warn!(bucket = %key.bucket, "bucket not in allow-list, refusing load");
            return LoadResult::not_found();
        }

        self.fetch(&key).await
    }

    async fn fetch(&self, key: &ObjectKey) -> LoadResult {
        debug!(key = %key, max_retry = self.config.max_retry, "fetching from object store");
        fetch_with_retry(&self.store, key, self.config.max_retry)
            .await
            .into_load_result()
    }
}
