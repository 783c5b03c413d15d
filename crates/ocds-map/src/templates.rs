//! Simple CSV template generation.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use ocds_model::ReleaseType;

use crate::error::Result;
use crate::mapper::CsvMapper;

impl CsvMapper {
    /// Template headers for one release type: every applicable mapping
    /// entry's friendly title in declared order, then schema-derived
    /// titles for top-level required fields the mapping does not cover.
    pub fn template_columns(&self, release_type: ReleaseType) -> Vec<String> {
        let mut columns = Vec::new();
        let mut covered: BTreeSet<&str> = BTreeSet::new();
        for entry in self.entries() {
            if entry.applies_to(release_type) {
                columns.push(entry.friendly_title.clone());
                covered.insert(entry.canonical_path.as_str());
            }
        }
        for field in self.schema_titles().required_fields() {
            if !covered.contains(field.as_str()) {
                columns.push(self.schema_titles().title_for(field));
            }
        }
        columns
    }

    /// Writes a header-only template for one release type.
    pub fn write_template<W: io::Write>(&self, writer: W, release_type: ReleaseType) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.template_columns(release_type))?;
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes `tender_template.csv`, `award_template.csv` and
    /// `spend_template.csv` into a directory, creating it if needed.
    pub fn write_templates(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for release_type in ReleaseType::ALL {
            let path = dir.join(format!("{release_type}_template.csv"));
            let file = File::create(&path)?;
            self.write_template(file, release_type)?;
            written.push(path);
        }
        Ok(written)
    }
}
