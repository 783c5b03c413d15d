//! Field titles derived from the OCDS release schema.
//!
//! The schema is consulted only for descriptive titles and the
//! top-level required field list; no structural validation happens
//! here.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::StandardsError;
use crate::paths::{default_data_root, schema_path};

/// Release-schema extract, loaded once and queried for field titles.
#[derive(Debug, Clone)]
pub struct SchemaTitles {
    root: Value,
    required: Vec<String>,
}

impl SchemaTitles {
    /// Loads the schema shipped under the default data root.
    pub fn load_default() -> Result<Self, StandardsError> {
        Self::load(&schema_path(&default_data_root()))
    }

    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let raw = fs::read_to_string(path).map_err(|error| StandardsError::io(path, error))?;
        let root: Value = serde_json::from_str(&raw).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let required = root
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self { root, required })
    }

    /// Top-level required fields, in schema order.
    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    /// A human-readable title for a canonical slash path.
    ///
    /// Walks the schema (numeric segments descend into array `items`,
    /// names into `properties`) and returns the node's `title`. Paths
    /// or nodes the schema does not describe fall back to a humanized
    /// version of the last path segment, so the result is total and
    /// stable for any input.
    pub fn title_for(&self, canonical_path: &str) -> String {
        let fallback = || humanize(canonical_path.rsplit('/').next().unwrap_or(canonical_path));
        match self.walk(canonical_path) {
            Some(node) => node
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(fallback),
            None => fallback(),
        }
    }

    fn walk(&self, canonical_path: &str) -> Option<&Value> {
        let mut node = &self.root;
        for segment in canonical_path.split('/') {
            node = if segment.chars().all(|c| c.is_ascii_digit()) {
                node.get("items")?
            } else {
                node.get("properties")?.get(segment)?
            };
        }
        Some(node)
    }
}

/// Turns a schema field name into a readable title: `contractPeriod`
/// becomes "Contract Period", `start_date` becomes "Start Date".
fn humanize(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut start_of_word = true;
    let mut prev_lower = false;
    for ch in segment.chars() {
        if ch == '_' || ch == '-' {
            start_of_word = true;
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower {
            out.push(' ');
            start_of_word = true;
        }
        if start_of_word {
            out.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            out.push(ch);
        }
        prev_lower = ch.is_ascii_lowercase();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_camel_case_and_separators() {
        assert_eq!(humanize("contractPeriod"), "Contract Period");
        assert_eq!(humanize("startDate"), "Start Date");
        assert_eq!(humanize("start_date"), "Start Date");
        assert_eq!(humanize("ocid"), "Ocid");
        assert_eq!(humanize("dueDate"), "Due Date");
    }
}
