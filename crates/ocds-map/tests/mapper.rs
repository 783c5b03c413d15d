use ocds_ingest::read_csv_table_from_reader;
use ocds_map::{CsvMapper, MapError};
use ocds_model::{ReleaseType, Table};

fn mapper() -> CsvMapper {
    CsvMapper::with_defaults().expect("load default mapper")
}

fn table_from(csv: &str) -> Table {
    read_csv_table_from_reader(csv.as_bytes()).expect("read fixture")
}

fn simple_tender_submission() -> Table {
    table_from(
        "Notice ID,Published Date,Buyer Name,Buyer ID,Tender Title,Tender Value,Closing Date\n\
         ocds-1,2020-08-01,Borough Council,buyer_id_0,Road resurfacing,10000,2020-09-01\n\
         ocds-2,2020-08-02,Borough Council,,Street lighting,20000,2020-09-02\n",
    )
}

fn simple_award_submission() -> Table {
    table_from(
        "Notice ID,Buyer Name,Award Title,Award Value,Supplier Name\n\
         ocds-10,Borough Council,Road resurfacing award,9500,Paving Ltd\n\
         ocds-11,Borough Council,Lighting award,19000,Lumen Ltd\n",
    )
}

#[test]
fn rename_maps_friendly_titles_to_canonical_paths() {
    let table = mapper().rename_friendly_cols(simple_tender_submission(), None);
    assert!(table.has_column("tender/title"));
    assert!(table.has_column("parties/0/name"));
    assert!(table.has_column("tender/tenderPeriod/endDate"));
    assert!(!table.has_column("Tender Title"));
}

#[test]
fn rename_leaves_unmapped_columns_untouched() {
    let table = table_from("Tender Title,Internal Ref\nRoad resurfacing,REF-1\n");
    let renamed = mapper().rename_friendly_cols(table, None);
    assert!(renamed.has_column("Internal Ref"));
    assert_eq!(renamed.cell(0, "Internal Ref"), "REF-1");
}

#[test]
fn rename_is_deterministic() {
    let engine = mapper();
    let once = engine.rename_friendly_cols(simple_award_submission(), None);
    let twice = engine.rename_friendly_cols(simple_award_submission(), None);
    assert_eq!(once, twice);
}

#[test]
fn detects_tender_from_tender_columns() {
    let engine = mapper();
    let renamed = engine.rename_friendly_cols(simple_tender_submission(), None);
    let detected = engine.detect_notice_type(&renamed).expect("detect");
    assert_eq!(detected, ReleaseType::Tender);
}

#[test]
fn detects_award_from_award_columns() {
    let engine = mapper();
    let renamed = engine.rename_friendly_cols(simple_award_submission(), None);
    let detected = engine.detect_notice_type(&renamed).expect("detect");
    assert_eq!(detected, ReleaseType::Award);
}

#[test]
fn mixed_signals_are_ambiguous() {
    let table = table_from("tender/title,awards/0/title\nA,B\n");
    let error = mapper().detect_notice_type(&table).expect_err("ambiguous");
    assert!(matches!(error, MapError::AmbiguousNoticeType { .. }));
}

#[test]
fn no_signal_defaults_to_tender() {
    let table = table_from("id,parties/0/name\n1,Borough Council\n");
    let detected = mapper().detect_notice_type(&table).expect("detect");
    assert_eq!(detected, ReleaseType::Tender);
}

#[test]
fn tender_pipeline_fills_buyer_ids_and_skips_suppliers() {
    let conversion = mapper()
        .convert_simple_csv(simple_tender_submission(), None)
        .expect("convert");
    assert_eq!(conversion.release_type, ReleaseType::Tender);

    let table = &conversion.table;
    // Explicit buyer id wins; the missing one falls back to the default.
    assert_eq!(table.cell(0, "parties/0/id"), "buyer_id_0");
    assert_eq!(table.cell(1, "parties/0/id"), "buyer");
    assert!(!table.has_column("awards/0/suppliers/0/id"));
}

#[test]
fn award_pipeline_links_suppliers_into_awards() {
    let conversion = mapper()
        .convert_simple_csv(simple_award_submission(), None)
        .expect("convert");
    assert_eq!(conversion.release_type, ReleaseType::Award);

    let table = &conversion.table;
    assert_eq!(table.cell(0, "parties/0/id"), "buyer");
    assert_eq!(table.cell(1, "parties/0/id"), "buyer");
    assert!(table.has_column("awards/0/suppliers/0/id"));
    assert_eq!(table.cell(0, "parties/1/id"), "supplier");
    assert_eq!(table.cell(0, "awards/0/suppliers/0/id"), "supplier");
}

#[test]
fn pipeline_adds_release_constants() {
    let conversion = mapper()
        .convert_simple_csv(simple_tender_submission(), None)
        .expect("convert");
    assert_eq!(conversion.table.cell(0, "initiationType"), "tender");
    assert_eq!(conversion.table.cell(0, "tag"), "tender");

    let award = mapper()
        .convert_simple_csv(simple_award_submission(), None)
        .expect("convert");
    assert_eq!(award.table.cell(0, "tag"), "award");
}

#[test]
fn augment_is_idempotent() {
    let engine = mapper();
    let renamed = engine.rename_friendly_cols(simple_award_submission(), None);
    let once = engine.augment_cols(renamed, ReleaseType::Award);
    let twice = engine.augment_cols(once.clone(), ReleaseType::Award);
    assert_eq!(once, twice);
}

#[test]
fn declared_type_overrides_detection() {
    let table = table_from("tender/title,awards/0/title\nA,B\n");
    let conversion = mapper()
        .convert_simple_csv(table, Some(ReleaseType::Award))
        .expect("declared type skips detection");
    assert_eq!(conversion.release_type, ReleaseType::Award);
}

#[test]
fn spend_pipeline_requires_declared_type() {
    let table = table_from(
        "Transaction ID,Transaction Date,Transaction Value,Supplier Name,Buyer Name\n\
         T-1,2020-08-01,150.00,Paving Ltd,Borough Council\n",
    );
    let conversion = mapper()
        .convert_simple_csv(table, Some(ReleaseType::Spend))
        .expect("convert spend");
    let table = &conversion.table;
    assert_eq!(
        table.cell(0, "contracts/0/implementation/transactions/0/id"),
        "T-1"
    );
    assert_eq!(table.cell(0, "parties/1/id"), "supplier");
    assert!(!table.has_column("awards/0/suppliers/0/id"));
    assert_eq!(table.cell(0, "tag"), "implementation");
}

#[test]
fn convert_simple_csv_file_reads_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tender.csv");
    std::fs::write(
        &path,
        "Tender Title,Buyer Name\nRoad resurfacing,Borough Council\n",
    )
    .expect("write fixture");

    let conversion = mapper()
        .convert_simple_csv_file(&path, None)
        .expect("convert");
    assert_eq!(conversion.release_type, ReleaseType::Tender);
    assert_eq!(conversion.table.cell(0, "initiationType"), "tender");
    assert_eq!(conversion.table.cell(0, "parties/0/id"), "buyer");
}

#[test]
fn output_simple_csv_restores_friendly_titles() {
    let engine = mapper();
    let renamed = engine.rename_friendly_cols(simple_tender_submission(), Some(ReleaseType::Tender));
    let simple = engine.output_simple_csv(&renamed, ReleaseType::Tender);

    assert_eq!(
        simple.columns,
        vec![
            "Notice ID",
            "Published Date",
            "Buyer Name",
            "Buyer ID",
            "Tender Title",
            "Tender Value",
            "Closing Date",
        ]
    );
    assert_eq!(simple.cell(0, "Tender Title"), "Road resurfacing");
}

#[test]
fn output_simple_csv_drops_unmapped_columns() {
    let engine = mapper();
    let conversion = engine
        .convert_simple_csv(simple_tender_submission(), None)
        .expect("convert");
    let simple = engine.output_simple_csv(&conversion.table, ReleaseType::Tender);
    // Inferred columns have no friendly titles and drop out of the simple view.
    assert!(!simple.has_column("initiationType"));
    assert!(!simple.has_column("tag"));
    assert!(simple.has_column("Buyer ID"));
}

mod round_trip {
    use ocds_model::{Row, Table};
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    use super::mapper;

    fn tender_titles() -> Vec<String> {
        mapper()
            .entries()
            .iter()
            .filter(|entry| entry.applies_to(ocds_model::ReleaseType::Tender))
            .map(|entry| entry.friendly_title.clone())
            .collect()
    }

    proptest! {
        #[test]
        fn rename_then_output_restores_any_mapped_column_set(
            titles in Just(tender_titles()).prop_shuffle().prop_flat_map(|all| {
                let len = all.len();
                subsequence(all, 0..=len)
            })
        ) {
            let engine = mapper();
            let mut table = Table::new(titles.clone());
            let mut row = Row::default();
            for title in &titles {
                row.set(title.clone(), "x");
            }
            table.push_row(row);

            let renamed = engine.rename_friendly_cols(table, Some(ocds_model::ReleaseType::Tender));
            let restored = engine.output_simple_csv(&renamed, ocds_model::ReleaseType::Tender);
            prop_assert_eq!(restored.columns, titles);
        }
    }
}
