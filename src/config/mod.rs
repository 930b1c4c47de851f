use crate::core::week::WeekStart;
use crate::db::pool::DEFAULT_POOL_SIZE;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}
fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}
fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind_address: default_bind_address(),
            allowed_origins: default_allowed_origins(),
            week_start: WeekStart::default(),
            pool_size: default_pool_size(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    /// Load configuration from the standard file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to unit, not to a struct with defaults
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Apply a `--db` override from the command line.
    pub fn with_database(mut self, path: &str) -> Self {
        self.database = expand_tilde(path).to_string_lossy().to_string();
        self
    }

    /// Initialize configuration and database location.
    ///
    /// Writes the config file unless `is_test`, creates the parent directory
    /// of the database, and returns the resulting configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()?
        };

        if let Some(path) = custom_db {
            config = config.with_database(path);
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
        }

        if let Some(parent) = Path::new(&config.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
