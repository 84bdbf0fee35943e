// Repository trait for the active dataset
use crate::domain::dataset::ActiveDataset;
use async_trait::async_trait;
use std::sync::Arc;

/// Holds exactly one active dataset. Writers replace it wholesale; readers get
/// an immutable snapshot that stays valid across a later replace.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Current dataset
    async fn snapshot(&self) -> Arc<ActiveDataset>;

    /// Swap in a new dataset
    async fn replace(&self, dataset: ActiveDataset);
}
