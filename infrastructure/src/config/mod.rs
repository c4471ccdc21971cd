//! Configuration file loading for article-tutor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ARTICLE_TUTOR_API_BASE` environment variable (`proxy.base_url` only)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tutor.toml` or `./.tutor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/article-tutor/config.toml`
//! 5. Default values
//!
//! Command-line flags sit above all of these and are applied by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_PROXY_BASE_URL, FileConfig, FileLoggingConfig,
    FileProxyConfig, FileRenderConfig, FileReplConfig, FileTutorConfig,
};
pub use loader::{API_BASE_ENV, ConfigLoader};
