// Repository trait for historical dataset access
use crate::domain::sample::Dataset;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Retrieve and parse the full historical dataset. Absent series in
    /// the source document come back as empty vectors; this is the only
    /// seam through which retrieval or parse errors may propagate.
    async fn load(&self) -> anyhow::Result<Dataset>;
}
