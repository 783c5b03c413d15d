use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use ocds_ingest::{read_csv_table, write_csv_table};
use ocds_map::CsvMapper;
use ocds_model::ReleaseType;

use crate::cli::{ConvertArgs, ExportArgs, MappingsArgs, TemplatesArgs};
use crate::summary::{ConversionSummary, apply_table_style};

fn load_mapper(data_dir: Option<&Path>) -> Result<CsvMapper> {
    match data_dir {
        Some(dir) => CsvMapper::from_data_dir(dir)
            .with_context(|| format!("load mapping data from {}", dir.display())),
        None => CsvMapper::with_defaults().context("load default mapping data"),
    }
}

pub fn run_convert(args: &ConvertArgs, data_dir: Option<&Path>) -> Result<ConversionSummary> {
    let mapper = load_mapper(data_dir)?;
    let declared = args.release_type.map(ReleaseType::from);
    let conversion = mapper
        .convert_simple_csv_file(&args.input, declared)
        .with_context(|| format!("convert {}", args.input.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| suffixed_path(&args.input, "_release"));
    write_csv_table(&output, &conversion.table)?;
    info!(
        release_type = %conversion.release_type,
        rows = conversion.table.rows.len(),
        output = %output.display(),
        "converted simple csv"
    );

    Ok(ConversionSummary {
        input: args.input.clone(),
        outputs: vec![output],
        release_type: Some(conversion.release_type),
        rows: conversion.table.rows.len(),
        columns: conversion.table.columns.len(),
        warnings: Vec::new(),
    })
}

pub fn run_export(args: &ExportArgs, data_dir: Option<&Path>) -> Result<ConversionSummary> {
    let mapper = load_mapper(data_dir)?;
    let table = read_csv_table(&args.input)?;
    let converted = mapper.convert_cf_export(table);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| suffixed_path(&args.input, "_release"));
    write_csv_table(&output, &converted.table)?;
    let mut outputs = vec![output];

    let release_type = match args.release_type.map(ReleaseType::from) {
        Some(release_type) => Some(release_type),
        None => {
            if args.simple {
                Some(mapper.detect_notice_type(&converted.table).with_context(
                    || "cannot derive the simple view without a notice type",
                )?)
            } else {
                mapper.detect_notice_type(&converted.table).ok()
            }
        }
    };

    if args.simple {
        let release_type =
            release_type.context("cannot derive the simple view without a notice type")?;
        let simple = mapper.output_simple_csv(&converted.table, release_type);
        let simple_path = suffixed_path(&args.input, "_simple");
        write_csv_table(&simple_path, &simple)?;
        outputs.push(simple_path);
    }

    info!(
        rows = converted.table.rows.len(),
        warnings = converted.warnings.len(),
        "converted contracts finder export"
    );

    Ok(ConversionSummary {
        input: args.input.clone(),
        outputs,
        release_type,
        rows: converted.table.rows.len(),
        columns: converted.table.columns.len(),
        warnings: converted.warnings,
    })
}

pub fn run_templates(args: &TemplatesArgs, data_dir: Option<&Path>) -> Result<()> {
    let mapper = load_mapper(data_dir)?;
    let written = mapper
        .write_templates(&args.output_dir)
        .with_context(|| format!("write templates to {}", args.output_dir.display()))?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn run_mappings(args: &MappingsArgs, data_dir: Option<&Path>) -> Result<()> {
    let mapper = load_mapper(data_dir)?;
    let mut table = Table::new();
    table.set_header(vec!["Type", "Friendly title", "Release path", "CF export path"]);
    apply_table_style(&mut table);
    for entry in mapper.entries() {
        if let Some(release_type) = args.release_type.map(ReleaseType::from)
            && !entry.applies_to(release_type)
        {
            continue;
        }
        table.add_row(vec![
            entry
                .release_type
                .map_or("all", |rt| rt.as_str())
                .to_string(),
            entry.friendly_title.clone(),
            entry.canonical_path.clone(),
            entry.raw_source_path.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `export-2020-08-01.csv` + `_release` -> `export-2020-08-01_release.csv`.
fn suffixed_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}{suffix}.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixed_path_keeps_the_directory() {
        let path = suffixed_path(Path::new("/tmp/export-2020-08-01.csv"), "_release");
        assert_eq!(path, Path::new("/tmp/export-2020-08-01_release.csv"));
    }

    #[test]
    fn suffixed_path_handles_extensionless_input() {
        let path = suffixed_path(Path::new("submission"), "_simple");
        assert_eq!(path, Path::new("submission_simple.csv"));
    }
}
