// In-process dataset store
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dataset::ActiveDataset;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct InMemoryDatasetStore {
    active: RwLock<Arc<ActiveDataset>>,
}

impl InMemoryDatasetStore {
    pub fn new(initial: ActiveDataset) -> Self {
        Self {
            active: RwLock::new(Arc::new(initial)),
        }
    }
}

#[async_trait]
impl DatasetRepository for InMemoryDatasetStore {
    async fn snapshot(&self) -> Arc<ActiveDataset> {
        self.active.read().await.clone()
    }

    async fn replace(&self, dataset: ActiveDataset) {
        let next = Arc::new(dataset);
        let previous = std::mem::replace(&mut *self.active.write().await, next);
        tracing::debug!(
            "Replaced dataset ({} rows from {:?}) loaded at {}",
            previous.table.len(),
            previous.source,
            previous.loaded_at
        );
    }
}
