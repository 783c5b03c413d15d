use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Table;

/// A row-level data problem found while converting.
///
/// Cell problems never abort a conversion; the offending value is left
/// in place and the caller decides how severe the warning is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWarning {
    /// Zero-based data row index (header row excluded).
    pub row: usize,
    /// Column the value was found in, named by its canonical path.
    pub column: String,
    /// The value that could not be normalized.
    pub value: String,
    /// Human-readable message describing the problem.
    pub message: String,
}

impl fmt::Display for CellWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column {}: {} ({:?})",
            self.row, self.column, self.message, self.value
        )
    }
}

/// A converted table together with the warnings collected on the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Converted {
    pub table: Table,
    pub warnings: Vec<CellWarning>,
}

impl Converted {
    pub fn clean(table: Table) -> Self {
        Self {
            table,
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
