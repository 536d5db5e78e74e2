pub mod config;
pub mod logging;

// Loader pipeline modules.
pub mod fetch;
pub mod http_origin;
pub mod loader;
pub mod object_key;
pub mod store;
