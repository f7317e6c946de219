//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "expert-delegator";
const PROJECT_FILES: [&str; 2] = ["delegator.toml", ".delegator.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./delegator.toml` or `./.delegator.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/expert-delegator/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let sources =
            Self::file_sources(Self::global_config_path(), config_path.map(|p| p.as_path()));
        Self::figment(&sources).extract().map_err(Box::new)
    }

    /// Load defaults plus environment variables, skipping every file
    /// (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(&[]).extract().map_err(Box::new)
    }

    /// Config files that exist, lowest priority first
    fn file_sources(global: Option<PathBuf>, explicit: Option<&Path>) -> Vec<PathBuf> {
        global
            .filter(|path| path.exists())
            .into_iter()
            .chain(Self::project_config_path())
            .chain(explicit.map(Path::to_path_buf))
            .collect()
    }

    fn figment(sources: &[PathBuf]) -> Figment {
        sources
            .iter()
            .fold(
                Figment::new().merge(Serialized::defaults(FileConfig::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(
                Env::raw()
                    .only(&["OPENAI_MODEL"])
                    .map(|_| "oracle.model".into()),
            )
            .merge(Env::prefixed("DELEGATOR_").split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/expert-delegator/config.toml if set,
    /// otherwise falls back to ~/.config/expert-delegator/config.toml
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
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     OPENAI_MODEL, DELEGATOR_*");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./delegator.toml or ./.delegator.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
