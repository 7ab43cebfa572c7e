//! Dataset acquisition: local file or remote JSON resource.
//!
//! Fetch and parse failures are the data-fetch boundary; they surface as
//! anyhow context here and never enter the renderer's error taxonomy.

use std::path::Path;

use anyhow::{Context, Result};
use heatmap_common::Dataset;
use tracing::info;

/// Load and validate the dataset from a JSON file on disk.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;
    let dataset = Dataset::from_json(&json)
        .with_context(|| format!("invalid dataset in {}", path.display()))?;
    info!(samples = dataset.len(), path = %path.display(), "loaded dataset");
    Ok(dataset)
}

/// Fetch and validate the dataset from a remote URL.
pub async fn fetch_url(url: &str) -> Result<Dataset> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("server error fetching {}", url))?;
    let json = response
        .text()
        .await
        .with_context(|| format!("failed to read body of {}", url))?;
    let dataset =
        Dataset::from_json(&json).with_context(|| format!("invalid dataset at {}", url))?;
    info!(samples = dataset.len(), url, "fetched dataset");
    Ok(dataset)
}
