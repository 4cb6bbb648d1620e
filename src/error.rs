// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecklensError {
    #[error("aggregation cache not found: {path}")]
    CacheMissing { path: PathBuf },

    #[error("no deck records in aggregation cache: {path}")]
    CacheEmpty { path: PathBuf },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecklensError>;
