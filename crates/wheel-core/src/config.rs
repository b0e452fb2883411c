use crate::category::Category;
use crate::chart::{ChartError, validate_categories};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let c = config::Config::builder()
            .add_source(config::File::from_str(s, config::FileFormat::Toml))
            .build()?;
        c.try_deserialize::<Self>()?.validated()
    }

    /// An empty list stands for the built-in wheel; anything else must fit one wheel.
    fn validated(self) -> Result<Self, ConfigError> {
        if !self.categories.is_empty() {
            validate_categories(&self.categories)?;
        }
        Ok(self)
    }

    /// Configured categories, or the built-in wheel when none are configured.
    pub fn categories_or_default(&self) -> Vec<Category> {
        if self.categories.is_empty() {
            Category::defaults()
        } else {
            self.categories.clone()
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid categories: {0}")]
    Categories(#[from] ChartError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "wheel", "impact-wheel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("WHEEL"))
        .build()?;

    s.try_deserialize::<Config>()?.validated()
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using built-in categories: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
