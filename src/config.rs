use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content: PathBuf,
    pub public: PathBuf,
    /// Page template; the built-in one is used when unset.
    pub template: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            public: PathBuf::from("public"),
            template: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title_placeholder: String,
    pub content_placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

impl Config {
    /// The configuration embedded at build time.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default_config.toml must match Config")
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        Self::parse(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
