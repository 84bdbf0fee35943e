// Chart service - Renders the current selection against the active dataset
use crate::application::chart_renderer::render;
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::chart::ChartSet;
use crate::domain::filters::FilterSelection;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn DatasetRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    pub async fn charts(&self, selection: &FilterSelection) -> ChartSet {
        let snapshot = self.repository.snapshot().await;
        tracing::debug!(
            "Rendering charts for {:?} over {} rows",
            selection,
            snapshot.table.len()
        );
        let charts = render(selection, &snapshot.table);
        tracing::debug!(
            "{} of 3 charts carry data",
            charts.iter().filter(|c| !c.is_placeholder()).count()
        );
        charts
    }
}
