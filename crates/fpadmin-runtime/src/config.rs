use crate::{Error, Result};
use fpadmin_engine::{DEFAULT_PAGE_SIZE_OPTIONS, SortDirection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const PATH_ENV: &str = "FPADMIN_PATH";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FPADMIN_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.fpadmin
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("fpadmin"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".fpadmin"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    pub default_direction: SortDirection,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            default_direction: SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed for the generated parts of the demo data
    pub demo_seed: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_seed: 42 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub list: ListConfig,
    pub seed: SeedConfig,
    pub log: LogConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::FILE_NAME)
    }

    /// Load and validate; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let list = &self.list;
        if list.page_size_options.is_empty() {
            return Err(Error::Config(
                "list.page_size_options must not be empty".to_string(),
            ));
        }
        if list.page_size_options.contains(&0) {
            return Err(Error::Config(
                "list.page_size_options must not contain 0".to_string(),
            ));
        }
        if !list.page_size_options.contains(&list.default_page_size) {
            return Err(Error::Config(format!(
                "list.default_page_size {} is not one of {:?}",
                list.default_page_size, list.page_size_options
            )));
        }
        Ok(())
    }
}
