//! `silo fetch <url>` – run one load and emit the bytes.

use anyhow::{bail, Result};
use std::io::Write;
use std::path::Path;

use silo_core::config::SiloConfig;
use silo_core::http_origin::CurlHttpOrigin;
use silo_core::loader::{LoadErrorKind, Loader};
use silo_core::store::S3Store;

pub async fn run_fetch(cfg: &SiloConfig, url: &str, output: Option<&Path>) -> Result<()> {
    let store = S3Store::connect(cfg).await;
    let loader = Loader::new(cfg.clone(), store, CurlHttpOrigin::new());

    let result = loader.load(url).await;

    if !result.successful {
        let kind = result.error.unwrap_or(LoadErrorKind::Upstream);
        bail!("{kind}: {url}");
    }

    let bytes = result.buffer.unwrap_or_default();
    match output {
        Some(path) => {
            std::fs::write(path, &bytes)?;
            eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}
