//! HTTP origin delegate.
//!
//! Requests that bypass the object store go through this seam. The core
//! never inspects the delegate's internals; `CurlHttpOrigin` is the stock
//! implementation, a whole-body GET over libcurl run off the async
//! runtime's blocking pool.

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use tracing::error;

use crate::loader::LoadResult;

/// Delegate for loads whose origin is a plain HTTP server.
#[async_trait]
pub trait HttpOrigin: Send + Sync {
    async fn load(&self, url: &str) -> LoadResult;
}

/// curl-backed HTTP origin: GET the full body, follow redirects.
#[derive(Debug, Clone, Default)]
pub struct CurlHttpOrigin;

impl CurlHttpOrigin {
    pub fn new() -> Self {
        Self
    }
}

/// Ensures the URL carries a scheme curl will accept. Well-formed http(s)
/// URLs are kept in their parser-normalized form, which also repairs odd
/// shapes like `http:example.com`; anything else defaults to http.
fn normalize_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed.to_string(),
        _ => format!("http://{}", url.trim_start_matches('/')),
    }
}

/// Performs the GET in the current thread; call from `spawn_blocking`
/// when used from async code.
fn fetch_blocking(url: &str) -> LoadResult {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    let configured = (|| -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(Duration::from_secs(30))?;
        Ok(())
    })();
    if let Err(e) = configured {
        error!(url, "HTTP origin setup failed: {}", e);
        return LoadResult::upstream();
    }

    let transferred = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .and_then(|_| transfer.perform())
    };
    if let Err(e) = transferred {
        error!(url, "HTTP origin transfer failed: {}", e);
        return LoadResult::upstream();
    }

    match easy.response_code() {
        Ok(code) if (200..300).contains(&code) => LoadResult::success(Bytes::from(body)),
        Ok(404) => LoadResult::not_found(),
        Ok(code) => {
            error!(url, code, "HTTP origin returned error status");
            LoadResult::upstream()
        }
        Err(e) => {
            error!(url, "HTTP origin gave no status: {}", e);
            LoadResult::upstream()
        }
    }
}

#[async_trait]
impl HttpOrigin for CurlHttpOrigin {
    async fn load(&self, url: &str) -> LoadResult {
        let url = normalize_url(url);
        match tokio::task::spawn_blocking(move || fetch_blocking(&url)).await {
            Ok(result) => result,
            Err(e) => {
                error!("HTTP origin task failed: {}", e);
                LoadResult::upstream()
            }
        }
    }
}
