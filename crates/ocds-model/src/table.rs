#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A single data row, keyed by column name. Absent keys read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, String>,
}

impl Row {
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }
}

/// An in-memory table with an ordered column set.
///
/// Column order is significant: it is the order headers were read in and
/// the order they are written back out. Renames happen in place and keep
/// the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cell value at (row, column); empty string when missing.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        self.rows.get(row).map(|r| r.get(column)).unwrap_or("")
    }

    /// Appends a column at the end of the column order if not present.
    pub fn ensure_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    /// Renames a column in place, rewriting the row keys.
    ///
    /// A rename onto an already existing column is skipped: the source
    /// column keeps its name so no data is silently merged or lost.
    /// Returns whether the rename happened.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if from == to || !self.has_column(from) || self.has_column(to) {
            return false;
        }
        for column in &mut self.columns {
            if column.as_str() == from {
                *column = to.to_string();
            }
        }
        for row in &mut self.rows {
            if let Some(value) = row.cells.remove(from) {
                row.cells.insert(to.to_string(), value);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> Table {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        let mut row = Row::default();
        row.set("a", "1");
        row.set("b", "2");
        table.push_row(row);
        let mut row = Row::default();
        row.set("a", "3");
        table.push_row(row);
        table
    }

    #[test]
    fn missing_cells_read_as_empty() {
        let table = two_row_table();
        assert_eq!(table.cell(1, "b"), "");
        assert_eq!(table.cell(5, "a"), "");
    }

    #[test]
    fn rename_rewrites_rows_and_keeps_position() {
        let mut table = two_row_table();
        assert!(table.rename_column("a", "x"));
        assert_eq!(table.columns, vec!["x", "b"]);
        assert_eq!(table.cell(0, "x"), "1");
        assert_eq!(table.cell(0, "a"), "");
    }

    #[test]
    fn rename_onto_existing_column_is_refused() {
        let mut table = two_row_table();
        assert!(!table.rename_column("a", "b"));
        assert_eq!(table.cell(0, "b"), "2");
    }

    #[test]
    fn ensure_column_is_idempotent() {
        let mut table = two_row_table();
        table.ensure_column("c");
        table.ensure_column("c");
        assert_eq!(table.columns, vec!["a", "b", "c"]);
    }
}
