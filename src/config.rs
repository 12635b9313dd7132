//! # Configuration
//!
//! Resolved with [`confique`] in priority order:
//! 1. Environment variables (`HOUSING_FILTER_API_URL`, ...).
//! 2. A TOML file: the `--config` path, or `housing-filter.toml` in the
//!    platform config directory (via `directories`).
//! 3. Compiled defaults.
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `api_url` | `HOUSING_FILTER_API_URL` | `http://localhost:5000` |
//! | `properties_file` | `HOUSING_FILTER_PROPERTIES_FILE` | unset (use the API) |
//! | `preferences_dir` | `HOUSING_FILTER_PREFERENCES_DIR` | platform data dir |
//! | `search_key` | `HOUSING_FILTER_SEARCH_KEY` | `kiwi_saved_search` |

use crate::error::{ListingError, Result};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "housing-filter.toml";

#[derive(Config, Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the listing API.
    #[config(env = "HOUSING_FILTER_API_URL", default = "http://localhost:5000")]
    pub api_url: String,

    /// Read listings from this JSON file instead of the API.
    #[config(env = "HOUSING_FILTER_PROPERTIES_FILE")]
    pub properties_file: Option<PathBuf>,

    /// Where saved searches live.
    #[config(env = "HOUSING_FILTER_PREFERENCES_DIR")]
    pub preferences_dir: Option<PathBuf>,

    /// Preference key of the saved search.
    #[config(env = "HOUSING_FILTER_SEARCH_KEY", default = "kiwi_saved_search")]
    pub search_key: String,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "kiwi", "housing-filter")
}

impl AppConfig {
    /// Load configuration. An explicit `path` must exist; the default config
    /// file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(ListingError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            Some(path) => Some(path.to_path_buf()),
            None => project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME)),
        };

        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// The configured preferences directory, falling back to the platform
    /// data directory.
    pub fn preferences_dir(&self) -> Option<PathBuf> {
        self.preferences_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
    }
}
