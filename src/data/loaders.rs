use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Load a JSON array of records from a file.
pub fn load_json_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let file =
        File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let records: Vec<R> = serde_json::from_reader(file)
        .with_context(|| format!("parsing JSON records from {}", path.display()))?;
    tracing::info!(target: "data", "loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load records from a CSV file with a header row.
pub fn load_csv_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: R =
            result.with_context(|| format!("parsing CSV record in {}", path.display()))?;
        records.push(record);
    }
    tracing::info!(target: "data", "loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Dispatch on the file extension; `.json` and `.csv` are supported.
pub fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json_records(path),
        Some("csv") => load_csv_records(path),
        _ => anyhow::bail!(
            "unsupported file type for {} (expected .json or .csv)",
            path.display()
        ),
    }
}
