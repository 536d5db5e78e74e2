//! Origin selection: HTTP bypass vs object store.

use crate::config::SiloConfig;

/// Upstream source for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Http,
    ObjectStore,
}

/// Decides where a request's bytes come from.
///
/// Pure predicate over config and URL: requests go to the HTTP origin only
/// when the bypass is enabled and the URL carries an http(s) scheme.
/// Everything else, including the predicate being disabled, falls back to
/// the object store.
pub fn select_origin(config: &SiloConfig, url: &str) -> Origin {
    if config.enable_http_origin && url.starts_with("http") {
        Origin::Http
    } else {
        Origin::ObjectStore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(enable_http_origin: bool) -> SiloConfig {
        SiloConfig {
            enable_http_origin,
            ..SiloConfig::default()
        }
    }

    #[test]
    fn http_url_with_bypass_enabled_goes_to_http() {
        assert_eq!(
            select_origin(&cfg(true), "http://cdn.example.com/photo.jpg"),
            Origin::Http
        );
        assert_eq!(
            select_origin(&cfg(true), "https://cdn.example.com/photo.jpg"),
            Origin::Http
        );
    }

    #[test]
    fn http_url_with_bypass_disabled_goes_to_store() {
        assert_eq!(
            select_origin(&cfg(false), "http://cdn.example.com/photo.jpg"),
            Origin::ObjectStore
        );
    }

    #[test]
    fn bucket_path_goes_to_store_either_way() {
        assert_eq!(
            select_origin(&cfg(true), "/images/photo.jpg"),
            Origin::ObjectStore
        );
        assert_eq!(
            select_origin(&cfg(false), "/images/photo.jpg"),
            Origin::ObjectStore
        );
    }
}
