//! Delimited-text reader for labeled tabular datasets.
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// One parsed row: numeric fields in file order plus the label token.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRecord {
    pub factors: Vec<f32>,
    pub label: String,
}

/// Configuration for reading delimited sample files.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

/// Read an iris-style delimited file.
///
/// Every field that parses as a float is a feature; the single remaining
/// textual field in each row is the class label. Rows with zero or more
/// than one textual field are rejected with their row number.
pub fn read_labeled_records<P: AsRef<Path>>(
    path: P,
    config: &ReaderConfig,
) -> Result<Vec<LabeledRecord>> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .from_path(&path)
        .with_context(|| format!("Failed to open sample file: {}", path.as_ref().display()))?;

    collect_records(reader)
}

/// Same as `read_labeled_records` but over any reader, e.g. an in-memory
/// buffer.
pub fn read_labeled_records_from<R: Read>(
    input: R,
    config: &ReaderConfig,
) -> Result<Vec<LabeledRecord>> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .from_reader(input);

    collect_records(reader)
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<LabeledRecord>> {
    let mut records = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let mut factors = Vec::with_capacity(record.len());
        let mut label: Option<String> = None;
        for field in record.iter() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            match field.parse::<f32>() {
                Ok(value) => factors.push(value),
                Err(_) => {
                    if label.replace(field.to_string()).is_some() {
                        return Err(anyhow!(
                            "Multiple non-numeric fields at row {}; expected exactly one label",
                            row_idx + 1
                        ));
                    }
                }
            }
        }

        let label = label
            .ok_or_else(|| anyhow!("No label field at row {}", row_idx + 1))?;
        records.push(LabeledRecord { factors, label });
    }

    log::debug!("Read {} labeled records", records.len());
    Ok(records)
}
