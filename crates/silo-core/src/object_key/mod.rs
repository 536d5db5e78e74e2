//! Bucket/key resolution from request URLs.
//!
//! Turns the request path into an `ObjectKey` (bucket + key) using the
//! configured addressing mode, and validates the bucket against the
//! configured allow-list. Validation never fails loudly; callers must check
//! `bucket_is_allowed` before issuing any store call.

mod allow;
mod parse;

pub use allow::bucket_is_allowed;
pub use parse::resolve;

/// Bucket and key for one object, derived once per load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey {
    pub bucket: String,
    pub key: String,
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}
