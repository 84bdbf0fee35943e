// Upload service - Parse an upload, swap the active dataset, publish dropdown state
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dataset::ActiveDataset;
use crate::domain::filters::{FilterOptions, FilterSelection};
use crate::infrastructure::csv_upload::parse_upload;
use serde::Serialize;
use std::sync::Arc;

/// What the page needs after an upload attempt: dropdown options, the selection
/// they start on, and the error slot text (empty on success).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownState {
    pub options: FilterOptions,
    pub selection: FilterSelection,
    pub error: String,
}

impl DropdownState {
    fn new(options: FilterOptions, error: String) -> Self {
        let selection = FilterSelection::from_defaults(&options);
        Self {
            options,
            selection,
            error,
        }
    }
}

#[derive(Clone)]
pub struct UploadService {
    repository: Arc<dyn DatasetRepository>,
}

impl UploadService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    /// Dropdown state for whatever dataset is active, with no error.
    pub async fn current_state(&self) -> DropdownState {
        let snapshot = self.repository.snapshot().await;
        DropdownState::new(FilterOptions::derive(&snapshot.table), String::new())
    }

    pub async fn handle_upload(&self, contents: Option<&str>, filename: Option<&str>) -> DropdownState {
        match parse_upload(contents, filename) {
            Ok(table) => {
                let options = FilterOptions::derive(&table);
                let filename = filename.unwrap_or_default();
                tracing::info!("Accepted upload {} with {} rows", filename, table.len());

                self.repository
                    .replace(ActiveDataset::uploaded(table, filename))
                    .await;

                DropdownState::new(options, String::new())
            }
            Err(e) => {
                tracing::warn!("Rejected upload {:?}: {}", filename, e);
                let snapshot = self.repository.snapshot().await;
                DropdownState::new(FilterOptions::derive(&snapshot.table), e.to_string())
            }
        }
    }
}
