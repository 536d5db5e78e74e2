//! One module per subcommand.

mod config_path;
mod fetch;
mod resolve;

pub use config_path::run_config_path;
pub use fetch::run_fetch;
pub use resolve::run_resolve;
