use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_bar_char")]
    pub bar_char: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_chart_width() -> usize {
    40
}
fn default_bar_char() -> String {
    "█".to_string()
}
fn default_wrap_width() -> usize {
    72
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            chart_width: default_chart_width(),
            bar_char: default_bar_char(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.activitylog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".activitylog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("activitylog.conf")
    }

    /// Return the default path of the CSV data file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("activities.csv")
    }

    /// Data file with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// List problems that would make the configuration unusable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.data_file.trim().is_empty() {
            problems.push("data_file is empty".to_string());
        }
        if self.chart_width == 0 {
            problems.push("chart_width must be greater than 0".to_string());
        }
        if self.bar_char.is_empty() {
            problems.push("bar_char is empty".to_string());
        }
        if self.wrap_width < 20 {
            problems.push("wrap_width must be at least 20".to_string());
        }

        problems
    }

    /// Create the config directory and file. With `is_test` the config file
    /// is left alone and only the returned value carries the data path.
    pub fn init_all(custom_file: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let data_file = match custom_file {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_file.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)
                .map_err(|e| AppError::Config(format!("cannot write config file: {e}")))?;
        }

        Ok(config)
    }
}
