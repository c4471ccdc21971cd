//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable overriding `proxy.base_url`
pub const API_BASE_ENV: &str = "ARTICLE_TUTOR_API_BASE";

const APP_DIR: &str = "article-tutor";
const PROJECT_FILES: [&str; 2] = ["tutor.toml", ".tutor.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ARTICLE_TUTOR_API_BASE` environment variable
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./tutor.toml` or `./.tutor.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/article-tutor/config.toml`
    /// 5. Default values
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env()).extract().map_err(Box::new)
    }

    /// Defaults plus environment, skipping every file (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::defaults()
            .merge(Self::env())
            .extract()
            .map_err(Box::new)
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn env() -> Env {
        Env::raw()
            .only(&[API_BASE_ENV])
            .map(|_| "proxy.base_url".into())
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/article-tutor/config.toml`, or the platform config
    /// directory when XDG is unset.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        match std::env::var(API_BASE_ENV) {
            Ok(value) => println!("  [FOUND] Env:      {}={}", API_BASE_ENV, value),
            Err(_) => println!("  [     ] Env:      {}", API_BASE_ENV),
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./tutor.toml or ./.tutor.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:   {}", path.display());
            } else {
                println!("  [     ] Global:   {}", path.display());
            }
        }

        println!("  [     ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PROXY_BASE_URL;
    use figment::Jail;
    use tutor_domain::{ExchangeMode, RenderStyle};

    fn isolate(jail: &mut Jail) {
        let dir = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", dir.display());
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.proxy.base_url, DEFAULT_PROXY_BASE_URL);
            assert_eq!(config.tutor.mode, ExchangeMode::Stateless);
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_names_app() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.ends_with("article-tutor/config.toml"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "tutor.toml",
                r#"
                [tutor]
                mode = "session"
                "#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.tutor.mode, ExchangeMode::Session);
            assert_eq!(config.proxy.base_url, DEFAULT_PROXY_BASE_URL);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                ".tutor.toml",
                r#"
                [render]
                mode = "incremental"
                chunk_chars = 4
                "#,
            )?;
            jail.create_file(
                "custom.toml",
                r#"
                [render]
                chunk_chars = 9
                "#,
            )?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.render.mode, RenderStyle::Incremental);
            assert_eq!(config.render.chunk_chars, 9);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "tutor.toml",
                r#"
                [proxy]
                base_url = "http://file.test/ai-proxy"
                timeout_seconds = 15
                "#,
            )?;
            jail.set_env(API_BASE_ENV, "https://env.test/ai-proxy");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.proxy.base_url, "https://env.test/ai-proxy");
            assert_eq!(config.proxy.timeout_seconds, Some(15));

            let defaults = ConfigLoader::load_defaults().unwrap();
            assert_eq!(defaults.proxy.base_url, "https://env.test/ai-proxy");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "tutor.toml",
                r#"
                [tutor]
                mode = "psychic"
                "#,
            )?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
