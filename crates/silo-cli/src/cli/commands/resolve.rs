//! `silo resolve <url>` – show bucket/key resolution and allow-list verdict.

use anyhow::Result;

use silo_core::config::SiloConfig;
use silo_core::loader::{select_origin, Origin};
use silo_core::object_key;

pub fn run_resolve(cfg: &SiloConfig, url: &str) -> Result<()> {
    if let Origin::Http = select_origin(cfg, url) {
        println!("origin: http (bypasses object store)");
        return Ok(());
    }

    match object_key::resolve(cfg, url) {
        Some(key) => {
            let allowed = object_key::bucket_is_allowed(cfg, &key.bucket);
            println!("origin: object store");
            println!("bucket: {}", key.bucket);
            println!("key:    {}", key.key);
            println!("allowed: {}", if allowed { "yes" } else { "no" });
        }
        None => {
            println!("origin: object store");
            println!("no bucket/key resolvable from '{url}'");
        }
    }
    Ok(())
}
