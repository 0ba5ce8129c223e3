use crate::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub sources: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub target_file: String,
    pub log_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            target_file: "transformed_data.csv".to_string(),
            log_file: "log_file.txt".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EtlError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| EtlError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| EtlError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["metricize.toml", ".metricize.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref directory) = cli_args.directory {
            self.output.directory = directory.clone();
        }

        if let Some(ref target_file) = cli_args.target_file {
            self.output.target_file = target_file.clone();
        }

        if let Some(ref log_file) = cli_args.log_file {
            self.output.log_file = log_file.clone();
        }

        if let Some(ref exclude) = cli_args.exclude {
            self.sources.exclude_patterns.extend(exclude.clone());
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| EtlError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| EtlError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.target_file.is_empty() {
            return Err(EtlError::Config {
                message: "Output file name must not be empty".to_string(),
            });
        }

        if self.output.log_file.is_empty() {
            return Err(EtlError::Config {
                message: "Log file name must not be empty".to_string(),
            });
        }

        for pattern in &self.sources.exclude_patterns {
            if let Err(e) = Regex::new(pattern) {
                return Err(EtlError::Config {
                    message: format!("Invalid exclude pattern '{}': {}", pattern, e),
                });
            }
        }

        Ok(())
    }

    pub fn target_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.target_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.log_file)
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub directory: Option<PathBuf>,
    pub target_file: Option<String>,
    pub log_file: Option<String>,
    pub exclude: Option<Vec<String>>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_target_file(mut self, target_file: Option<String>) -> Self {
        self.target_file = target_file;
        self
    }

    pub fn with_log_file(mut self, log_file: Option<String>) -> Self {
        self.log_file = log_file;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }
}
