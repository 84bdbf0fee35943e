// Bundled sample dataset loaded at startup
use crate::domain::dataset::ActiveDataset;
use crate::infrastructure::csv_upload::parse_csv_text;
use anyhow::Context;
use std::path::Path;

pub fn load_default_dataset(path: impl AsRef<Path>) -> anyhow::Result<ActiveDataset> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read default dataset {}", path.display()))?;

    let table = parse_csv_text(&text)
        .with_context(|| format!("Default dataset {} is not a valid sales CSV", path.display()))?;

    tracing::info!("Loaded {} default sales records from {}", table.len(), path.display());
    Ok(ActiveDataset::bundled(table, &path.display().to_string()))
}
