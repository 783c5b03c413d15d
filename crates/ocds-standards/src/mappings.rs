//! Loader for the declarative CSV mapping table.
//!
//! The mapping table is a CSV with one row per mapped field:
//! `contracts_finder_daily_csv_path` (raw export column, may be empty),
//! `csv_header` (friendly template header), `uri` (canonical release
//! path) and `release_type` (empty = applies to every type).

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::ReaderBuilder;

use ocds_model::{MappingEntry, ReleaseType};

use crate::StandardsError;
use crate::paths::{default_data_root, mappings_path};

const RAW_PATH_COLUMN: &str = "contracts_finder_daily_csv_path";
const FRIENDLY_COLUMN: &str = "csv_header";
const URI_COLUMN: &str = "uri";
const RELEASE_TYPE_COLUMN: &str = "release_type";

/// Loads the mapping table shipped under the default data root.
pub fn load_default_mappings() -> Result<Vec<MappingEntry>, StandardsError> {
    load_mappings(&mappings_path(&default_data_root()))
}

/// Loads and validates a mapping table file.
///
/// Rows keep file order: template generation relies on it. Fails on a
/// missing file, missing required columns, unknown release type tokens,
/// rows naming only one of title/path, and duplicate titles or
/// canonical paths within one release type.
pub fn load_mappings(path: &Path) -> Result<Vec<MappingEntry>, StandardsError> {
    let (headers, rows) = read_csv_rows(path)?;
    for column in [FRIENDLY_COLUMN, URI_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(StandardsError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut entries = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let friendly_title = row.get(FRIENDLY_COLUMN).cloned().unwrap_or_default();
        let canonical_path = row.get(URI_COLUMN).cloned().unwrap_or_default();
        if friendly_title.is_empty() && canonical_path.is_empty() {
            continue;
        }
        if friendly_title.is_empty() || canonical_path.is_empty() {
            return Err(StandardsError::Csv {
                path: path.to_path_buf(),
                message: format!("row {idx}: csv_header and uri must both be set"),
            });
        }
        let release_type = match row.get(RELEASE_TYPE_COLUMN).map(String::as_str) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ReleaseType>().map_err(|_| {
                StandardsError::InvalidReleaseType {
                    path: path.to_path_buf(),
                    row: idx,
                    value: raw.to_string(),
                }
            })?),
        };
        entries.push(MappingEntry {
            raw_source_path: row.get(RAW_PATH_COLUMN).filter(|v| !v.is_empty()).cloned(),
            friendly_title,
            canonical_path,
            release_type,
        });
    }

    check_duplicates(path, &entries)?;
    Ok(entries)
}

/// Filters entries to those applicable to one release type, keeping
/// file order.
pub fn entries_for(entries: &[MappingEntry], release_type: ReleaseType) -> Vec<MappingEntry> {
    entries
        .iter()
        .filter(|entry| entry.applies_to(release_type))
        .cloned()
        .collect()
}

/// Loads the table and filters to one release type in a single call.
pub fn load_mappings_for(
    path: &Path,
    release_type: ReleaseType,
) -> Result<Vec<MappingEntry>, StandardsError> {
    Ok(entries_for(&load_mappings(path)?, release_type))
}

fn check_duplicates(path: &Path, entries: &[MappingEntry]) -> Result<(), StandardsError> {
    for release_type in ReleaseType::ALL {
        let mut titles = BTreeSet::new();
        let mut uris = BTreeSet::new();
        for entry in entries.iter().filter(|e| e.applies_to(release_type)) {
            if !titles.insert(entry.friendly_title.as_str()) {
                return Err(duplicate(
                    path,
                    release_type,
                    FRIENDLY_COLUMN,
                    &entry.friendly_title,
                ));
            }
            if !uris.insert(entry.canonical_path.as_str()) {
                return Err(duplicate(
                    path,
                    release_type,
                    URI_COLUMN,
                    &entry.canonical_path,
                ));
            }
        }
    }
    Ok(())
}

fn duplicate(
    path: &Path,
    release_type: ReleaseType,
    column: &str,
    value: &str,
) -> StandardsError {
    StandardsError::Duplicate {
        path: path.to_path_buf(),
        what: format!("{column} {value:?}"),
        release_type: release_type.to_string(),
    }
}

type CsvRows = (Vec<String>, Vec<BTreeMap<String, String>>);

fn read_csv_rows(path: &Path) -> Result<CsvRows, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| csv_open_error(path, error))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, &error))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

fn csv_open_error(path: &Path, error: csv::Error) -> StandardsError {
    if let csv::ErrorKind::Io(io_error) = error.into_kind() {
        StandardsError::io(path, io_error)
    } else {
        StandardsError::Csv {
            path: path.to_path_buf(),
            message: "unreadable csv".to_string(),
        }
    }
}

fn csv_error(path: &Path, error: &csv::Error) -> StandardsError {
    StandardsError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
