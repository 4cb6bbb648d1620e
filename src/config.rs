// src/config.rs
//! Runtime defaults and optional local overrides (`decklens.toml`).

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_CACHE_FILE: &str = "data/cache/daily_exact_stats.json";
pub const DEFAULT_OUTPUT_FILE: &str = "data/cache/clusters.json";
pub const DEFAULT_THRESHOLD: f64 = 1.0;
pub const DEFAULT_SUMMARY_SIZE: usize = 10;

const LOCAL_CONFIG_FILE: &str = "decklens.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub cache_file: PathBuf,
    pub output_file: PathBuf,
    pub threshold: f64,
    pub summary_size: usize,
}

#[derive(Debug, Default, Deserialize)]
struct LocalConfig {
    cache_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    threshold: Option<f64>,
    summary_size: Option<usize>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            threshold: DEFAULT_THRESHOLD,
            summary_size: DEFAULT_SUMMARY_SIZE,
        }
    }

    /// Creates a new config and loads local settings (`decklens.toml`).
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    /// Applies overrides from `decklens.toml` if one exists. A missing or
    /// invalid local file leaves the defaults untouched.
    pub fn load_local_config(&mut self) {
        let Ok(content) = fs::read_to_string(LOCAL_CONFIG_FILE) else {
            return;
        };
        self.parse_toml(&content);
    }

    pub fn parse_toml(&mut self, content: &str) {
        let local: LocalConfig = toml::from_str(content).unwrap_or_default();
        if let Some(cache_file) = local.cache_file {
            self.cache_file = cache_file;
        }
        if let Some(output_file) = local.output_file {
            self.output_file = output_file;
        }
        if let Some(threshold) = local.threshold {
            self.threshold = threshold;
        }
        if let Some(summary_size) = local.summary_size {
            self.summary_size = summary_size;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
