#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use nistcat::test_utils::*;

// Lookup Tests

#[test]
fn test_find_control_by_number() -> Result<()> {
    let catalog = sample_catalog()?;
    let control = catalog.find_control("number", "AC-1");
    assert!(control.is_some(), "AC-1 should be found by number");
    Ok(())
}

#[test]
fn test_find_control_by_title() -> Result<()> {
    let catalog = sample_catalog()?;
    let by_title = catalog.find_control("title", "Account Management");
    let by_number = catalog.find_control("number", "AC-2");
    assert_eq!(by_title, by_number, "Both fields identify the same control");
    Ok(())
}

#[test]
fn test_find_control_exact_text_only() -> Result<()> {
    let catalog = sample_catalog()?;
    assert!(catalog.find_control("number", "AC-1 ").is_none());
    assert!(catalog.find_control("number", "ac-1").is_none());
    Ok(())
}

#[test]
fn test_find_control_first_match_wins() -> Result<()> {
    let xml = "<root>\
        <control><number>AC-1</number><title>First Copy</title></control>\
        <control><number>AC-1</number><title>Second Copy</title></control>\
        </root>";
    let catalog = ControlCatalog::parse(xml)?;
    let found = catalog.find_control("number", "AC-1").unwrap();
    let first = catalog.document().children(catalog.document().root())[0];
    assert_eq!(found, first, "Duplicates resolve to document order");
    Ok(())
}

#[test]
fn test_find_control_is_depth_two_only() -> Result<()> {
    let fixture = include_str!("input/catalog.xml");
    let catalog = ControlCatalog::parse(fixture)?;
    // Enhancement numbers live three levels down and are never matched.
    assert!(catalog.find_control("number", "AC-2 (1)").is_none());
    // Statement numbers are nested as well.
    assert!(catalog.find_control("number", "AC-1a.").is_none());
    Ok(())
}

#[test]
fn test_find_control_no_match_returns_none() -> Result<()> {
    let catalog = sample_catalog()?;
    assert!(catalog.find_control("number", "ZZ-99").is_none());
    Ok(())
}

// Text Dump Tests

#[test]
fn test_control_text_joins_descendant_text() -> Result<()> {
    let catalog = sample_catalog()?;
    let text = catalog.control_text("number", "AC-2")?;
    assert_eq!(
        text,
        "ACCESS CONTROL AC-2 Account Management \
         The organization identifies and selects accounts to support organizational missions."
    );
    Ok(())
}

#[test]
fn test_control_text_not_found_is_error() -> Result<()> {
    let catalog = sample_catalog()?;
    let err = catalog.control_text("number", "ZZ-99").unwrap_err();
    match err.kind() {
        CatalogErrorKind::Query(QueryError::ControlNotFound { tag, text }) => {
            assert_eq!(tag, "number");
            assert_eq!(text, "ZZ-99");
        }
        other => panic!("Expected ControlNotFound, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_document_text_covers_all_controls() -> Result<()> {
    let catalog = sample_catalog()?;
    let text = catalog.document_text();
    assert!(text.contains("AC-1"));
    assert!(text.contains("AC-2"));
    assert!(text.contains("Account Management"));
    Ok(())
}

// Load Tests

#[test]
fn test_malformed_xml_is_fatal() {
    let result = ControlCatalog::parse("<controls><control></controls>");
    assert!(result.is_err(), "Mismatched tags must fail the load");
    let err = result.unwrap_err();
    assert!(matches!(err.kind(), CatalogErrorKind::Xml(_)));
}

#[test]
fn test_namespaced_and_bare_tags_both_match() -> Result<()> {
    // Lookup goes through namespace stripping, so a prefixed field tag
    // matches the bare name.
    let xml = "<c:root xmlns:c=\"urn:c\">\
        <c:control><c:number>AC-1</c:number></c:control>\
        </c:root>";
    let catalog = ControlCatalog::parse(xml)?;
    assert!(catalog.find_control("number", "AC-1").is_some());
    Ok(())
}
