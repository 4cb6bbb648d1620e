// src/cache.rs
//! Aggregation-cache input and atomic cluster output.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DecklensError, Result};
use crate::types::{Cluster, DeckRecord};

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    signatures: HashMap<String, DeckRecord>,
}

/// Loads the full deck population from the aggregation cache.
///
/// Records come back sorted by signature: JSON object order is not
/// contractual, and the sorted order is what makes the downstream
/// tie-breaking and partition deterministic.
///
/// # Errors
/// Returns [`DecklensError::CacheMissing`] / [`DecklensError::CacheEmpty`]
/// when there is nothing to cluster, so the binary can exit non-zero
/// without writing partial output; `Io`/`Json` on unreadable input.
pub fn load_snapshot(path: &Path) -> Result<Vec<(String, DeckRecord)>> {
    if !path.exists() {
        return Err(DecklensError::CacheMissing { path: path.into() });
    }

    let content = fs::read_to_string(path).map_err(|source| DecklensError::Io {
        source,
        path: path.into(),
    })?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;

    if snapshot.signatures.is_empty() {
        return Err(DecklensError::CacheEmpty { path: path.into() });
    }

    let mut records: Vec<(String, DeckRecord)> = snapshot.signatures.into_iter().collect();
    records.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(records)
}

/// Writes the cluster list atomically (temp file + rename), replacing any
/// previous version so concurrent readers never observe a half-written
/// file.
///
/// # Errors
/// Returns error if serialization, directory creation, or the write fails.
pub fn write_clusters(path: &Path, clusters: &[Cluster]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| DecklensError::Io {
                source,
                path: parent.to_path_buf(),
            })?;
        }
    }

    let content = serde_json::to_string_pretty(clusters)?;
    atomic_write(path, &content)
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).map_err(|source| DecklensError::Io {
        source,
        path: temp_path.clone(),
    })?;

    fs::rename(&temp_path, path).map_err(|source| DecklensError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    Ok(())
}
