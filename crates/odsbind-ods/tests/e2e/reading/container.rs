//! Tests for the zip container: required parts, encryption, file loading.

use std::io::Write;

use odsbind_ods::{OdsError, OdsReader, ReaderOptions};

use crate::{
    build_ods, content_xml, ods_with_body, read_bytes, table, text_cell, ENCRYPTED_MANIFEST,
    PLAIN_MANIFEST,
};

#[test]
fn test_encrypted_document_is_rejected_by_default() {
    let bytes = build_ods(Some(&content_xml("")), Some(ENCRYPTED_MANIFEST));

    let err = read_bytes(&bytes, &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::Unsupported(_)), "got {err:?}");
}

#[test]
fn test_encrypted_document_allowed_when_check_disabled() {
    let bytes = build_ods(
        Some(r#"<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"><office:body><office:spreadsheet/></office:body></office:document-content>"#),
        Some(ENCRYPTED_MANIFEST),
    );
    let options = ReaderOptions {
        throw_on_encrypted: false,
        ..Default::default()
    };

    let doc = read_bytes(&bytes, &options).unwrap();
    assert_eq!(doc.sheet_count(), 0);
}

#[test]
fn test_encryption_checked_before_content() {
    // no content.xml at all: the manifest check must fail first
    let bytes = build_ods(None, Some(ENCRYPTED_MANIFEST));
    let err = read_bytes(&bytes, &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::Unsupported(_)), "got {err:?}");
}

#[test]
fn test_missing_content_part() {
    let bytes = build_ods(None, Some(PLAIN_MANIFEST));
    let err = read_bytes(&bytes, &ReaderOptions::default()).unwrap_err();
    match err {
        OdsError::MissingPart(part) => assert_eq!(part, "content.xml"),
        other => panic!("Expected MissingPart, got {other:?}"),
    }
}

#[test]
fn test_manifest_is_optional() {
    let body = table("Only", &format!("<table:table-row>{}</table:table-row>", text_cell("x")));
    let bytes = build_ods(Some(&content_xml(&body)), None);

    let doc = read_bytes(&bytes, &ReaderOptions::default()).unwrap();
    assert_eq!(doc.sheet_names(), vec!["Only"]);
}

#[test]
fn test_missing_spreadsheet_body() {
    let bytes = build_ods(
        Some(r#"<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"><office:body><office:text/></office:body></office:document-content>"#),
        Some(PLAIN_MANIFEST),
    );
    let err = read_bytes(&bytes, &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::InvalidFormat(_)), "got {err:?}");
}

#[test]
fn test_not_a_zip() {
    let err = read_bytes(b"plain text, not an archive", &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::Zip(_)), "got {err:?}");
}

#[test]
fn test_malformed_xml() {
    let bytes = build_ods(
        Some(r#"<office:document-content><office:body><office:spreadsheet><table:table></table:row>"#),
        Some(PLAIN_MANIFEST),
    );
    let err = read_bytes(&bytes, &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, OdsError::Xml(_)), "got {err:?}");
}

#[test]
fn test_read_file() {
    let body = table(
        "FromDisk",
        &format!("<table:table-row>{}</table:table-row>", text_cell("on disk")),
    );
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&ods_with_body(&body)).unwrap();
    file.flush().unwrap();

    let doc = OdsReader::read_file(file.path(), &ReaderOptions::default()).unwrap();
    let sheet = doc.sheet_by_name("FromDisk").unwrap();
    assert_eq!(sheet.cell(0, 0).unwrap().to_string(), "on disk");
}

#[test]
fn test_read_file_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = OdsReader::read_file(dir.path().join("nope.ods"), &ReaderOptions::default())
        .unwrap_err();
    assert!(matches!(err, OdsError::Io(_)), "got {err:?}");
}

#[test]
fn test_same_bytes_same_document() {
    let body = format!(
        "{}{}",
        table(
            "A",
            r#"<table:table-row table:number-rows-repeated="3"><table:table-cell office:value-type="float" office:value="1" table:number-columns-repeated="4"/></table:table-row>"#
        ),
        table("B", &format!("<table:table-row>{}</table:table-row>", text_cell("b")))
    );
    let bytes = ods_with_body(&body);

    let first = read_bytes(&bytes, &ReaderOptions::default()).unwrap();
    let second = read_bytes(&bytes, &ReaderOptions::default()).unwrap();
    assert_eq!(first, second);
}
