use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_questions")]
    pub questions: usize,
    #[serde(default = "default_plus_operands")]
    pub plus_operands: i64,
    #[serde(default = "default_mult_operands")]
    pub mult_operands: usize,
    #[serde(default = "default_max_operand")]
    pub max_operand: i64,
    #[serde(default = "default_wrong_log")]
    pub wrong_log: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_questions() -> usize {
    10
}
fn default_plus_operands() -> i64 {
    4
}
fn default_mult_operands() -> usize {
    2
}
fn default_max_operand() -> i64 {
    100
}
fn default_wrong_log() -> PathBuf {
    PathBuf::from("wrong_questions.txt")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            plus_operands: default_plus_operands(),
            mult_operands: default_mult_operands(),
            max_operand: default_max_operand(),
            wrong_log: default_wrong_log(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads `path`, or the default config file when `path` is `None`.
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("abacus")
            .join("config.toml")
    }
}
