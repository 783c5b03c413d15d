use std::io::Write;

use ocds_ingest::{read_csv_table, read_csv_table_from_reader, write_csv_table};

#[test]
fn reads_header_and_rows() {
    let table = read_csv_table_from_reader(
        "Tender Title,Buyer Name\nRoad resurfacing,Borough Council\n".as_bytes(),
    )
    .expect("read table");
    assert_eq!(table.columns, vec!["Tender Title", "Buyer Name"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.cell(0, "Buyer Name"), "Borough Council");
}

#[test]
fn strips_bom_and_collapses_header_whitespace() {
    let table = read_csv_table_from_reader(
        "\u{feff}Tender  Title ,Buyer Name\nA,B\n".as_bytes(),
    )
    .expect("read table");
    assert_eq!(table.columns, vec!["Tender Title", "Buyer Name"]);
}

#[test]
fn skips_blank_rows_and_pads_short_rows() {
    let table = read_csv_table_from_reader(
        "a,b,c\n1,2,3\n,,\n4,5\n".as_bytes(),
    )
    .expect("read table");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(1, "b"), "5");
    assert_eq!(table.cell(1, "c"), "");
}

#[test]
fn overlong_rows_are_truncated_to_the_header() {
    let table = read_csv_table_from_reader("a,b\n1,2,3,4\n".as_bytes()).expect("read table");
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.cell(0, "b"), "2");
}

#[test]
fn empty_input_yields_empty_table() {
    let table = read_csv_table_from_reader("".as_bytes()).expect("read table");
    assert!(table.columns.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn write_then_read_round_trips() {
    let original = read_csv_table_from_reader(
        "tender/title,parties/0/name\nRoad resurfacing,\"Council, Borough\"\n".as_bytes(),
    )
    .expect("read table");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    write_csv_table(&path, &original).expect("write table");

    let reread = read_csv_table(&path).expect("reread table");
    assert_eq!(reread, original);
    assert_eq!(reread.cell(0, "parties/0/name"), "Council, Borough");
}

#[test]
fn missing_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"a\n1\n").expect("write");
    let path = file.path().to_path_buf();
    drop(file);
    assert!(read_csv_table(&path).is_err());
}
