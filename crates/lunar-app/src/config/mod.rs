//! Configuration for Lunar Console
//!
//! Settings come from `{config_dir}/lunar/config.toml`, then the `LUNAR_URL`
//! and `LUNAR_API_KEY` environment variables, then command-line flags.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_FILENAME, ENV_API_KEY, ENV_URL};
pub use types::*;
