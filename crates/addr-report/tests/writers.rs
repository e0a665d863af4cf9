//! Integration tests for the output writers.

use addr_model::{AddressRecord, Components};
use addr_report::{OutputFormat, write_csv, write_json, write_records};

fn test_records() -> Vec<AddressRecord> {
    let mut first = AddressRecord::new("1", "51 allee de la pepiniere");
    first.components = Components::from_tokens(["51", "ALLEE", "DE", "LA", "PEPINIERE"]);
    let mut second = AddressRecord::new("8", "8 avenue de l'opera");
    second.components = Components::from_tokens(["8", "AVENUE", "DE", "L'OPERA"]);
    let emptied = AddressRecord::new("7", "");
    vec![first, second, emptied]
}

fn csv_string(records: &[AddressRecord]) -> String {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records).expect("write csv");
    String::from_utf8(buffer).expect("utf-8 output")
}

#[test]
fn csv_output_snapshot() {
    let output = csv_string(&test_records());

    insta::assert_snapshot!(output, @r"
    id,address,comp_1,comp_2,comp_3,comp_4,comp_5,comp_6,comp_7,comp_8
    1,51 allee de la pepiniere,51,ALLEE,DE,LA,PEPINIERE,,,
    8,8 avenue de l'opera,8,AVENUE,DE,L'OPERA,,,,
    7,,,,,,,,,
    ");
}

#[test]
fn csv_output_quotes_fields_with_commas() {
    let record = AddressRecord::new("a,b", "x");
    let output = csv_string(&[record]);
    assert!(output.lines().nth(1).unwrap().starts_with("\"a,b\",x,"));
}

#[test]
fn csv_output_without_records_has_header_only() {
    let output = csv_string(&[]);
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn json_output_is_an_array_of_records() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &test_records()).expect("write json");

    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse json");
    assert_eq!(
        value[0],
        serde_json::json!({
            "id": "1",
            "address": "51 allee de la pepiniere",
            "components": ["51", "ALLEE", "DE", "LA", "PEPINIERE"],
        })
    );
    assert_eq!(value[2]["components"], serde_json::json!([]));
    assert!(buffer.ends_with(b"]\n"));
}

#[test]
fn write_records_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("addresses.json");

    write_records(&path, &test_records(), OutputFormat::Json).expect("write records");

    let text = std::fs::read_to_string(&path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse json");
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}

#[test]
fn write_records_csv_matches_writer_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("addresses.csv");

    write_records(&path, &test_records(), OutputFormat::Csv).expect("write records");

    let text = std::fs::read_to_string(&path).expect("read output");
    assert_eq!(text, csv_string(&test_records()));
}
