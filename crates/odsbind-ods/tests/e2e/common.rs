//! Common utilities for E2E tests.

use std::io::{Cursor, Write};

use odsbind_core::Document;
use odsbind_ods::{OdsReader, OdsResult, ReaderOptions};

/// A manifest with no encrypted entries
pub const PLAIN_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.3">
  <manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.spreadsheet"/>
  <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
</manifest:manifest>"#;

/// A manifest declaring `content.xml` as encrypted
pub const ENCRYPTED_MANIFEST: &str = r#"<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0">
  <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml">
    <manifest:encryption-data/>
  </manifest:file-entry>
</manifest:manifest>"#;

/// Wrap a spreadsheet body in a complete `content.xml`
pub fn content_xml(spreadsheet_body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"
    office:version="1.3">
  <office:body>
    <office:spreadsheet>{}</office:spreadsheet>
  </office:body>
</office:document-content>"#,
        spreadsheet_body
    )
}

/// Build an ODS container holding the given parts
///
/// `content` of `None` leaves `content.xml` out of the archive.
pub fn build_ods(content: Option<&str>, manifest: Option<&str>) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let cursor = Cursor::new(&mut buf);
        let mut zip = zip::ZipWriter::new(cursor);
        let options = zip::write::SimpleFileOptions::default();

        zip.start_file("mimetype", options).unwrap();
        zip.write_all(b"application/vnd.oasis.opendocument.spreadsheet")
            .unwrap();

        if let Some(manifest) = manifest {
            zip.start_file("META-INF/manifest.xml", options).unwrap();
            zip.write_all(manifest.as_bytes()).unwrap();
        }

        if let Some(content) = content {
            zip.start_file("content.xml", options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }

        zip.finish().unwrap();
    }
    buf
}

/// Build a regular ODS whose spreadsheet holds `body`
pub fn ods_with_body(body: &str) -> Vec<u8> {
    build_ods(Some(&content_xml(body)), Some(PLAIN_MANIFEST))
}

/// Read an in-memory ODS
pub fn read_bytes(bytes: &[u8], options: &ReaderOptions) -> OdsResult<Document> {
    OdsReader::read(Cursor::new(bytes), options)
}

/// Read a spreadsheet body with default options, panicking on failure
pub fn read_body(body: &str) -> Document {
    read_bytes(&ods_with_body(body), &ReaderOptions::default()).expect("Failed to read document")
}

/// A single-sheet body with `rows` verbatim inside the table
pub fn table(name: &str, rows: &str) -> String {
    format!(r#"<table:table table:name="{}">{}</table:table>"#, name, rows)
}

/// A `string` cell holding one paragraph
pub fn text_cell(text: &str) -> String {
    format!(
        r#"<table:table-cell office:value-type="string"><text:p>{}</text:p></table:table-cell>"#,
        text
    )
}

/// A `float` cell
pub fn float_cell(value: f64) -> String {
    format!(
        r#"<table:table-cell office:value-type="float" office:value="{}"/>"#,
        value
    )
}
