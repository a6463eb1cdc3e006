#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use nistcat::test_utils::*;

#[test]
fn test_missing_catalog_file_is_io_error() {
    let result = load_catalog("nonexistent_catalog.xml");
    assert!(
        result.is_err(),
        "Expected error when reading non-existent file"
    );

    let err = result.unwrap_err();
    match err.kind() {
        CatalogErrorKind::IO(IOError::FileNotFound(_)) => { /* expected */ }
        other => panic!("Expected IO error, got {:?}", other),
    }
}

#[test]
fn test_load_catalog_from_file() {
    let temp_path = tmp_file_path("load_test.xml");
    let temp_path_str = temp_path.to_str().expect("valid path");

    write_file(temp_path_str, SAMPLE_CATALOG).expect("Failed to write catalog");
    let catalog = load_catalog(temp_path_str).expect("Failed to load catalog");
    assert!(catalog.find_control("number", "AC-1").is_some());

    let _ = fs::remove_file(temp_path);
}

#[test]
fn test_written_assignment_document_matches_joined_lines() {
    let temp_path = tmp_file_path("assignments.txt");
    let temp_path_str = temp_path.to_str().expect("valid path");

    let catalog = sample_catalog().expect("sample catalog parses");
    catalog
        .write_assignment_document(temp_path_str)
        .expect("Failed to write assignment document");

    let written = fs::read_to_string(&temp_path).expect("Failed to read back");
    assert_eq!(
        written,
        catalog.assignment_document().concat(),
        "File content equals the joined line sequence byte for byte"
    );

    let _ = fs::remove_file(temp_path);
}

#[test]
fn test_write_truncates_previous_content() {
    let temp_path = tmp_file_path("truncate_test.txt");
    let temp_path_str = temp_path.to_str().expect("valid path");

    write_file(temp_path_str, "stale content that is much longer").expect("seed write");
    let catalog = sample_catalog().expect("sample catalog parses");
    catalog
        .write_assignment_document(temp_path_str)
        .expect("Failed to overwrite");

    let written = fs::read_to_string(&temp_path).expect("Failed to read back");
    assert_eq!(written, catalog.assignment_document().concat());

    let _ = fs::remove_file(temp_path);
}
