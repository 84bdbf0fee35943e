// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::upload_service::UploadService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub upload_service: UploadService,
    pub chart_service: ChartService,
    pub repository: Arc<dyn DatasetRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self {
            upload_service: UploadService::new(repository.clone()),
            chart_service: ChartService::new(repository.clone()),
            repository,
        }
    }
}
