use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ocds_model::{CellWarning, ReleaseType};

/// Result of one CLI conversion, for the human-facing summary.
pub struct ConversionSummary {
    pub input: PathBuf,
    pub outputs: Vec<PathBuf>,
    pub release_type: Option<ReleaseType>,
    pub rows: usize,
    pub columns: usize,
    pub warnings: Vec<CellWarning>,
}

impl ConversionSummary {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

pub fn print_summary(summary: &ConversionSummary) {
    println!("Input: {}", summary.input.display());
    for output in &summary.outputs {
        println!("Output: {}", output.display());
    }
    if let Some(release_type) = summary.release_type {
        println!("Release type: {release_type}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(summary.rows),
        Cell::new(summary.columns),
        warning_count_cell(summary.warnings.len()),
    ]);
    println!("{table}");

    print_warning_table(&summary.warnings);
}

fn print_warning_table(warnings: &[CellWarning]) {
    if warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for warning in warnings {
        table.add_row(vec![
            Cell::new(warning.row),
            Cell::new(&warning.column),
            Cell::new(&warning.value).fg(Color::Yellow),
            Cell::new(&warning.message),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn warning_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
