//! The CSV mapping engine.
//!
//! Translates between the three column vocabularies of a procurement
//! disclosure table: raw Contracts Finder export headers, friendly
//! template headers, and canonical release paths. All reference data is
//! loaded at construction and never mutated, so one engine can be
//! shared read-only across threads.

use std::path::Path;

use tracing::debug;

use ocds_model::{CellWarning, Converted, MappingEntry, ReleaseType, Row, Table};
use ocds_standards::{SchemaTitles, load_mappings, mappings_path, schema_path};

use crate::augment::augment_cols;
use crate::error::{MapError, Result};
use crate::normalize::{is_amount_path, is_date_path, normalize_amount, normalize_date};

/// Result of the simple-template conversion pipeline: the canonical
/// table plus the notice type it was resolved as.
#[derive(Debug, Clone)]
pub struct SimpleConversion {
    pub release_type: ReleaseType,
    pub table: Table,
}

pub struct CsvMapper {
    entries: Vec<MappingEntry>,
    titles: SchemaTitles,
}

impl CsvMapper {
    pub fn new(entries: Vec<MappingEntry>, titles: SchemaTitles) -> Self {
        Self { entries, titles }
    }

    /// Builds an engine from a data directory laid out like the in-repo
    /// `data/` root.
    pub fn from_data_dir(root: &Path) -> Result<Self> {
        let entries = load_mappings(&mappings_path(root))?;
        let titles = SchemaTitles::load(&schema_path(root))?;
        Ok(Self::new(entries, titles))
    }

    /// Builds an engine from the default data root (`OCDS_DATA_DIR` or
    /// the in-repo data directory).
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            ocds_standards::load_default_mappings()?,
            SchemaTitles::load_default()?,
        ))
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn schema_titles(&self) -> &SchemaTitles {
        &self.titles
    }

    fn entries_for(
        &self,
        release_type: Option<ReleaseType>,
    ) -> impl Iterator<Item = &MappingEntry> {
        self.entries
            .iter()
            .filter(move |entry| release_type.is_none_or(|rt| entry.applies_to(rt)))
    }

    /// Renames friendly template headers to canonical release paths.
    ///
    /// Columns with no mapping entry pass through untouched, preserving
    /// publisher-specific extra data. With no declared release type the
    /// whole table is consulted in file order and the first matching
    /// entry wins, which keeps the rename deterministic.
    pub fn rename_friendly_cols(
        &self,
        mut table: Table,
        release_type: Option<ReleaseType>,
    ) -> Table {
        for entry in self.entries_for(release_type) {
            if table.rename_column(&entry.friendly_title, &entry.canonical_path) {
                debug!(
                    from = %entry.friendly_title,
                    to = %entry.canonical_path,
                    "renamed column"
                );
            }
        }
        table
    }

    /// Classifies a canonical-path table as tender or award from the
    /// columns present.
    ///
    /// Tables carrying both tender and award columns are ambiguous and
    /// the caller must declare the type. A table with neither signal
    /// defaults to tender; spend tables are never inferred.
    pub fn detect_notice_type(&self, table: &Table) -> Result<ReleaseType> {
        let tender_cols: Vec<String> = columns_with_prefix(table, "tender/");
        let award_cols: Vec<String> = columns_with_prefix(table, "awards/");

        match (tender_cols.is_empty(), award_cols.is_empty()) {
            (false, false) => Err(MapError::AmbiguousNoticeType {
                tender_cols,
                award_cols,
            }),
            (true, false) => Ok(ReleaseType::Award),
            (false, true) => Ok(ReleaseType::Tender),
            (true, true) => {
                debug!("no tender or award columns present, defaulting to tender");
                Ok(ReleaseType::Tender)
            }
        }
    }

    /// Array-path augmentation; see [`crate::augment`].
    pub fn augment_cols(&self, table: Table, release_type: ReleaseType) -> Table {
        augment_cols(table, release_type)
    }

    /// The standard friendly-template pipeline: rename, resolve the
    /// notice type (declared wins over detection), then augment.
    pub fn convert_simple_csv(
        &self,
        table: Table,
        declared: Option<ReleaseType>,
    ) -> Result<SimpleConversion> {
        let renamed = self.rename_friendly_cols(table, declared);
        let release_type = match declared {
            Some(release_type) => release_type,
            None => self.detect_notice_type(&renamed)?,
        };
        let table = augment_cols(renamed, release_type);
        Ok(SimpleConversion {
            release_type,
            table,
        })
    }

    /// Path-based entry point for host applications: reads the file
    /// and runs the simple-template pipeline.
    pub fn convert_simple_csv_file(
        &self,
        path: &Path,
        declared: Option<ReleaseType>,
    ) -> Result<SimpleConversion> {
        let table = ocds_ingest::read_csv_table(path)
            .map_err(|error| MapError::Io(std::io::Error::other(error)))?;
        self.convert_simple_csv(table, declared)
    }

    /// Converts a raw Contracts Finder daily export to canonical paths
    /// and normalizes date and amount values.
    ///
    /// Cells that fail to normalize are left as-is and reported as
    /// warnings; a single bad value never aborts the conversion.
    pub fn convert_cf_export(&self, mut table: Table) -> Converted {
        for entry in &self.entries {
            if let Some(raw_path) = &entry.raw_source_path {
                table.rename_column(raw_path, &entry.canonical_path);
            }
        }

        let mut warnings = Vec::new();
        let columns = table.columns.clone();
        for column in &columns {
            if is_date_path(column) {
                normalize_column(&mut table, column, normalize_date, "unparseable date", &mut warnings);
            } else if is_amount_path(column) {
                normalize_column(&mut table, column, normalize_amount, "unparseable amount", &mut warnings);
            }
        }
        Converted { table, warnings }
    }

    /// Inverse rename: canonical paths back to friendly titles.
    ///
    /// Columns without a friendly mapping for the release type are
    /// dropped; only declared round-trip columns survive.
    pub fn output_simple_csv(&self, table: &Table, release_type: ReleaseType) -> Table {
        let mut kept: Vec<(String, String)> = Vec::new();
        for column in &table.columns {
            let friendly = self
                .entries_for(Some(release_type))
                .find(|entry| &entry.canonical_path == column)
                .map(|entry| entry.friendly_title.clone());
            if let Some(friendly) = friendly {
                kept.push((column.clone(), friendly));
            }
        }

        let mut out = Table::new(kept.iter().map(|(_, friendly)| friendly.clone()).collect());
        for row in &table.rows {
            let mut simple_row = Row::default();
            for (canonical, friendly) in &kept {
                let value = row.get(canonical);
                if !value.is_empty() {
                    simple_row.set(friendly.clone(), value);
                }
            }
            out.push_row(simple_row);
        }
        out
    }
}

fn columns_with_prefix(table: &Table, prefix: &str) -> Vec<String> {
    table
        .columns
        .iter()
        .filter(|column| column.starts_with(prefix))
        .cloned()
        .collect()
}

fn normalize_column(
    table: &mut Table,
    column: &str,
    normalize: fn(&str) -> Option<String>,
    message: &str,
    warnings: &mut Vec<CellWarning>,
) {
    for (row_idx, row) in table.rows.iter_mut().enumerate() {
        let value = row.get(column).to_string();
        if value.is_empty() {
            continue;
        }
        match normalize(&value) {
            Some(normalized) => {
                if normalized != value {
                    row.set(column, normalized);
                }
            }
            None => warnings.push(CellWarning {
                row: row_idx,
                column: column.to_string(),
                value,
                message: message.to_string(),
            }),
        }
    }
}
