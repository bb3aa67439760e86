use std::io::Write;

use leetfinder::catalog::{Catalog, CatalogError};
use leetfinder::engine::filter::{filter_by_keywords, filter_problems};
use tempfile::NamedTempFile;

#[test]
fn bundled_sample_catalog_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/problems.json");
    let catalog = Catalog::load(std::path::Path::new(path)).expect("sample catalog parses");
    assert!(!catalog.is_empty());
    assert!(catalog.problems().iter().all(|p| !p.title.is_empty()));

    let stack: Vec<&str> = filter_problems(catalog.problems(), "#stack")
        .into_iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(stack, vec!["Valid Parentheses", "Min Stack"]);

    let both = filter_by_keywords(catalog.problems(), "#array two-pointers");
    assert_eq!(both.len(), 1);
}

#[test]
fn malformed_document_is_a_parse_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{\"title\": \"not an array\"}}").expect("write");
    let err = Catalog::load(file.path()).expect_err("object is not a catalog");
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Catalog::load(&dir.path().join("absent.json")).expect_err("no file");
    assert!(matches!(err, CatalogError::Read { .. }));
}
