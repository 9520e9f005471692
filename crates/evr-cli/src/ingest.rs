//! Reads a fetched analytics result table from CSV.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use evr_model::{Cell, ResultTable};

/// Read a result table: first record is the header, every following
/// record a data row. Cells that parse as finite numbers become numeric,
/// empty cells become missing.
pub fn read_result_table(path: &Path) -> Result<ResultTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let Some(header) = records.next() else {
        bail!("{}: empty result table, expected a header row", path.display());
    };
    let headers: Vec<String> = header
        .with_context(|| format!("read header: {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in records.enumerate() {
        let record = record.with_context(|| format!("read record {}: {}", idx + 1, path.display()))?;
        if record.len() != headers.len() {
            bail!(
                "{}: row {} has {} cells, expected {}",
                path.display(),
                idx + 1,
                record.len(),
                headers.len()
            );
        }
        rows.push(record.iter().map(parse_cell).collect());
    }

    ResultTable::new(headers, rows).context("assemble result table")
}

fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Cell::Number(value),
        _ => Cell::Text(trimmed.to_string()),
    }
}
