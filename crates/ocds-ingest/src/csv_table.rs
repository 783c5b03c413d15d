use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::warn;

use ocds_model::{Row, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into a [`Table`].
///
/// The first non-blank row is the header. Header cells are BOM-stripped
/// and whitespace-collapsed; blank data rows are skipped; short rows pad
/// with empty cells and overlong rows are truncated with a warning.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    read_csv_table_from_reader(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Reads a CSV table from any reader (an upload buffer, a test string).
pub fn read_csv_table_from_reader<R: io::Read>(reader: R) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("read record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    let Some((header_row, data_rows)) = raw_rows.split_first() else {
        return Ok(Table::default());
    };

    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    let mut table = Table::new(headers);
    for (row_idx, record) in data_rows.iter().enumerate() {
        if record.len() > table.columns.len() {
            warn!(
                row = row_idx,
                expected = table.columns.len(),
                got = record.len(),
                "row has more cells than headers, truncating"
            );
        }
        let mut row = Row::default();
        for (idx, column) in table.columns.iter().enumerate() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            if !value.is_empty() {
                row.cells.insert(column.clone(), value.to_string());
            }
        }
        table.push_row(row);
    }
    Ok(table)
}

/// Writes a table as CSV, header row first, cells in column order.
///
/// The table is already fully built in memory by the time this runs, so
/// a failed write never leaves a half-converted output behind a
/// successful exit.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create csv: {}", path.display()))?;
    write_csv_table_to_writer(file, table)
        .with_context(|| format!("write csv: {}", path.display()))
}

pub fn write_csv_table_to_writer<W: io::Write>(writer: W, table: &Table) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(&table.columns)
        .context("write header")?;
    for row in &table.rows {
        let record: Vec<&str> = table.columns.iter().map(|column| row.get(column)).collect();
        csv_writer.write_record(&record).context("write row")?;
    }
    csv_writer.flush().context("flush csv")?;
    Ok(())
}
