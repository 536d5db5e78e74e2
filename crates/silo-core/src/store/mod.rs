//! Object store client seam.
//!
//! The store reports common failures (missing object, throttling) as
//! status-coded data rather than transport errors, so `get` returns a
//! `StoreResponse` instead of a `Result`. Classification of that response
//! into retry decisions lives in `crate::fetch`.

mod s3;

pub use s3::S3Store;

use async_trait::async_trait;
use bytes::Bytes;

use crate::object_key::ObjectKey;

/// Raw result of one "get object" call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreResponse {
    /// Nothing came back at all: no connection, no metadata.
    Unreachable,
    /// The store answered with an error descriptor. `status` is the HTTP
    /// status code from the response metadata when one was present.
    Error {
        status: Option<u16>,
        message: String,
    },
    /// Full object body, read eagerly to completion.
    Body(Bytes),
}

/// Single-operation client for a bucket-addressed object store.
///
/// Implementations must be safe for concurrent independent calls; the
/// fetch loop issues calls strictly sequentially within one load.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get(&self, key: &ObjectKey) -> StoreResponse;
}
