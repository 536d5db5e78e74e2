//! Bucket allow-list check.

use crate::config::SiloConfig;

/// Returns true when the resolved bucket may be read from.
///
/// `allowed_buckets = None` allows any bucket. Membership is
/// case-insensitive. Never fails; callers short-circuit to a not-found
/// result when this returns false, before any store call.
pub fn bucket_is_allowed(config: &SiloConfig, bucket: &str) -> bool {
    match &config.allowed_buckets {
        None => true,
        Some(allowed) => allowed.iter().any(|b| b.eq_ignore_ascii_case(bucket)),
    }
}
