// Active dataset domain model
use super::sales::SalesTable;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DatasetSource {
    Bundled { path: String },
    Upload { filename: String },
}

/// The table currently driving dropdowns and charts.
#[derive(Debug, Clone)]
pub struct ActiveDataset {
    pub table: SalesTable,
    pub source: DatasetSource,
    pub loaded_at: DateTime<Utc>,
}

impl ActiveDataset {
    pub fn new(table: SalesTable, source: DatasetSource) -> Self {
        Self {
            table,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn bundled(table: SalesTable, path: &str) -> Self {
        Self::new(
            table,
            DatasetSource::Bundled {
                path: path.to_string(),
            },
        )
    }

    pub fn uploaded(table: SalesTable, filename: &str) -> Self {
        Self::new(
            table,
            DatasetSource::Upload {
                filename: filename.to_string(),
            },
        )
    }
}
