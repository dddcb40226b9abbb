mod common;

use common::read_fixture;
use edgar_tables::{
    Cell, Document, DocumentKind, EdgarError, ErrorKind, FlattenOptions, SubmissionHistory,
    flatten_str,
};

fn history() -> SubmissionHistory {
    let content = read_fixture("submissions/CIK0000320193.json");
    match Document::parse(DocumentKind::Submissions, &content).unwrap() {
        Document::Submissions(history) => history,
        other => panic!("unexpected document: {:?}", other.kind()),
    }
}

#[test]
fn parse_submission_history() {
    let history = history();

    assert_eq!(history.entity.cik, "320193");
    assert_eq!(history.entity.name, "Apple Inc.");
    assert_eq!(history.entity.sic.as_deref(), Some("3571"));
    assert_eq!(history.recent.len(), 3);

    let first = &history.recent.records[0];
    assert_eq!(first.accession_number, "0000320193-24-000123");
    assert_eq!(first.form, "10-K");
    assert_eq!(first.filing_date.as_deref(), Some("2024-11-01"));
    assert_eq!(first.report_date.as_deref(), Some("2024-09-28"));

    assert_eq!(history.files.len(), 1);
    assert_eq!(history.files[0].name, "CIK0000320193-submissions-001.json");
    assert_eq!(history.files[0].filing_count, 1224);
}

#[test]
fn flatten_submissions() {
    let content = read_fixture("submissions/CIK0000320193.json");
    let table =
        flatten_str(DocumentKind::Submissions, &content, FlattenOptions::default()).unwrap();

    assert_eq!(
        &table.columns()[..6],
        ["cik", "name", "sic", "sicDescription", "accessionNumber", "filingDate"]
    );
    assert_eq!(table.columns().len(), 4 + 14);
    assert_eq!(table.len(), 3);

    let forms: Vec<_> = table.column("form").unwrap().filter_map(Cell::as_str).collect();
    assert_eq!(forms, ["10-K", "10-Q", "4"]);

    // Each row pairs values by position across the parallel arrays.
    let last = table.row(2).unwrap();
    assert_eq!(last.get("accessionNumber").and_then(Cell::as_str), Some("0001140361-24-041536"));
    assert_eq!(last.get("primaryDocument").and_then(Cell::as_str), Some("xslF345X05/form4.xml"));
    assert_eq!(last.get("size").and_then(Cell::as_u64), Some(5426));
    assert_eq!(last.get("name").and_then(Cell::as_str), Some("Apple Inc."));
}

#[test]
fn unequal_parallel_arrays_fail() {
    let content = read_fixture("submissions/CIK0000320193.json").replace(
        r#""form": ["10-K", "10-Q", "4"]"#,
        r#""form": ["10-K", "10-Q"]"#,
    );
    let err = flatten_str(DocumentKind::Submissions, &content, FlattenOptions::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    match err {
        EdgarError::ShapeMismatch {
            path,
            reference,
            expected,
            found,
        } => {
            assert_eq!(path, "filings.recent.form");
            assert_eq!(reference, "filings.recent.accessionNumber");
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn flatten_submission_page() {
    let content = read_fixture("submissions/CIK0000320193-submissions-001.json");
    let table =
        flatten_str(DocumentKind::SubmissionPage, &content, FlattenOptions::default()).unwrap();

    assert_eq!(table.columns()[0], "accessionNumber");
    assert!(table.column_index("cik").is_none());
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1, "form").and_then(Cell::as_str), Some("4"));
}

#[test]
fn history_serializes_records() {
    let value = serde_json::to_value(history().recent.records[1].clone()).unwrap();
    assert_eq!(value["accession_number"], "0000320193-24-000081");
    assert_eq!(value["form"], "10-Q");
}
