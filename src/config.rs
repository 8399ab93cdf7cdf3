use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::site::SiteError;

/// Site layout, all paths relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content: PathBuf,
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("templates/base.html"),
            output: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Load config from a TOML file. A missing file yields the defaults;
    /// a file that does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| SiteError::Config(path.to_path_buf(), e))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
