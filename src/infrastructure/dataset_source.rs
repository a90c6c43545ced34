// Dataset source implementations - local file and HTTP document
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::sample::{Dataset, PowerSample, TempSample};
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch dataset: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse dataset document: {0}")]
    Parse(#[from] serde_json::Error),
}

// Raw document shape: { "temperature": { "values": [...] },
// "power": { "values": [...] } }, with absent keys meaning empty series.
#[derive(Debug, Deserialize)]
struct RawSeries<T> {
    #[serde(default = "Vec::new")]
    values: Vec<T>,
}

impl<T> Default for RawSeries<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    temperature: RawSeries<TempSample>,
    #[serde(default)]
    power: RawSeries<PowerSample>,
}

fn parse_dataset(text: &str) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = serde_json::from_str(text)?;
    Ok(Dataset::new(raw.temperature.values, raw.power.values))
}

/// Dataset document on the local filesystem.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetRepository for FileDatasetSource {
    async fn load(&self) -> anyhow::Result<Dataset> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(DatasetError::Io)
            .with_context(|| format!("reading dataset from {}", self.path.display()))?;
        Ok(parse_dataset(&text)?)
    }
}

/// Dataset document fetched over HTTP.
pub struct HttpDatasetSource {
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetSource {
    async fn load(&self) -> anyhow::Result<Dataset> {
        let response = reqwest::get(&self.url)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(DatasetError::Http)
            .with_context(|| format!("fetching dataset from {}", self.url))?;
        let text = response.text().await.map_err(DatasetError::Http)?;
        Ok(parse_dataset(&text)?)
    }
}

/// Pick a source implementation from the configured location.
pub fn dataset_source(source: &str) -> Arc<dyn DatasetRepository> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Arc::new(HttpDatasetSource::new(source))
    } else {
        Arc::new(FileDatasetSource::new(source))
    }
}
