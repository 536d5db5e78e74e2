//! Request path → bucket/key extraction.

use percent_encoding::percent_decode_str;

use super::ObjectKey;
use crate::config::SiloConfig;

/// Resolves the bucket and key for a request URL.
///
/// The host hands us the URL path portion, percent-encoded and with an
/// optional leading slash. Two addressing modes:
///
/// - `root_bucket` set: the whole decoded path is the key.
/// - otherwise: the first path segment is the bucket, the rest is the key.
///
/// Returns `None` when no non-empty bucket and key can be derived (e.g. a
/// bare bucket with no key).
pub fn resolve(config: &SiloConfig, url: &str) -> Option<ObjectKey> {
    let decoded = percent_decode_str(url).decode_utf8().ok()?;
    let path = decoded.trim_start_matches('/');

    if path.is_empty() {
        return None;
    }

    if let Some(bucket) = &config.root_bucket {
        return Some(ObjectKey {
            bucket: bucket.clone(),
            key: path.to_string(),
        });
    }

    let (bucket, key) = path.split_once('/')?;
    if bucket.is_empty() || key.is_empty() {
        return None;
    }

    Some(ObjectKey {
        bucket: bucket.to_string(),
        key: key.to_string(),
    })
}
