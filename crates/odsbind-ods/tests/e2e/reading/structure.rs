//! Tests for sheet and row structure: repeats, collapsing, trimming, covered cells.

use odsbind_core::CellValue;
use odsbind_ods::ReaderOptions;
use pretty_assertions::assert_eq;

use crate::{float_cell, ods_with_body, read_body, read_bytes, table, text_cell};

#[test]
fn test_sheet_names_in_document_order() {
    let body = format!(
        r#"{}{}<table:table><table:table-row>{}</table:table-row></table:table>"#,
        table("First", ""),
        table("Second", ""),
        text_cell("unnamed")
    );
    let doc = read_body(&body);
    assert_eq!(doc.sheet_names(), vec!["First", "Second", "Sheet"]);
}

#[test]
fn test_empty_spreadsheet_has_no_sheets() {
    let doc = read_body("");
    assert!(doc.is_empty());
}

#[test]
fn test_repeated_rows_share_storage() {
    let rows = format!(
        r#"<table:table-row table:number-rows-repeated="3">{}{}</table:table-row>"#,
        text_cell("a"),
        float_cell(2.0)
    );
    let doc = read_body(&table("S", &rows));
    let sheet = doc.sheet(0).unwrap();

    assert_eq!(sheet.row_count(), 3);
    assert!(sheet.rows()[0].shares_storage_with(&sheet.rows()[2]));
    for r in 0..3 {
        assert_eq!(sheet.cell(r, 1).unwrap().value, CellValue::Float(Some(2.0)));
    }
}

#[test]
fn test_empty_rows_collapse_but_interior_gaps_stay() {
    let rows = format!(
        r#"<table:table-row>{a}</table:table-row>
<table:table-row table:number-rows-repeated="1048570"><table:table-cell table:number-columns-repeated="1024"/></table:table-row>
<table:table-row>{b}</table:table-row>"#,
        a = text_cell("top"),
        b = text_cell("bottom")
    );
    let doc = read_body(&table("S", &rows));
    let sheet = doc.sheet(0).unwrap();

    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.cell(1, 0).unwrap().to_string(), "bottom");
}

#[test]
fn test_empty_rows_kept_when_collapsing_disabled() {
    let rows = format!(
        r#"<table:table-row>{}</table:table-row><table:table-row table:number-rows-repeated="3"><table:table-cell/></table:table-row>"#,
        text_cell("x")
    );
    let options = ReaderOptions {
        collapse_empty_repeated_rows: false,
        ..Default::default()
    };
    let doc = read_bytes(&ods_with_body(&table("S", &rows)), &options).unwrap();
    let sheet = doc.sheet(0).unwrap();

    assert_eq!(sheet.row_count(), 4);
    assert!(sheet.row(3).unwrap().is_empty());
}

#[test]
fn test_whitespace_cells_are_content() {
    let rows = format!(
        r#"<table:table-row>{}<table:table-cell office:value-type="string"><text:p><text:s text:c="2"/></text:p></table:table-cell></table:table-row><table:table-row table:number-rows-repeated="3">{}</table:table-row>"#,
        text_cell("a"),
        text_cell(" ")
    );
    let doc = read_body(&table("S", &rows));
    let sheet = doc.sheet(0).unwrap();

    // neither the trailing space cell nor the space rows are dropped
    assert_eq!(sheet.row(0).unwrap().len(), 2);
    assert_eq!(sheet.cell(0, 1).unwrap().to_string(), "  ");
    assert_eq!(sheet.row_count(), 4);
    assert_eq!(sheet.cell(3, 0).unwrap().to_string(), " ");
}

#[test]
fn test_empty_string_rows_collapse() {
    let rows = format!(
        r#"<table:table-row table:number-rows-repeated="5">{}<table:table-cell office:value-type="string"/></table:table-row><table:table-row>{}</table:table-row>"#,
        text_cell(""),
        text_cell("kept")
    );
    let doc = read_body(&table("S", &rows));
    let sheet = doc.sheet(0).unwrap();
    assert_eq!(sheet.row_count(), 1);
    assert_eq!(sheet.cell(0, 0).unwrap().to_string(), "kept");
}

#[test]
fn test_trailing_empty_cells_trimmed() {
    let rows = format!(
        r#"<table:table-row>{}<table:table-cell/>{}<table:table-cell table:number-columns-repeated="16380"/></table:table-row>"#,
        text_cell("a"),
        text_cell("c")
    );

    let doc = read_body(&table("S", &rows));
    let row = doc.sheet(0).unwrap().row(0).unwrap();
    assert_eq!(row.len(), 3);
    assert!(row.cell(1).value.is_empty());

    let options = ReaderOptions {
        trim_trailing_empty_cells: false,
        ..Default::default()
    };
    let doc = read_bytes(&ods_with_body(&table("S", &rows)), &options).unwrap();
    assert_eq!(doc.sheet(0).unwrap().row(0).unwrap().len(), 16_383);
}

#[test]
fn test_covered_cells_become_empty_columns() {
    let rows = format!(
        r#"<table:table-row>
  <table:table-cell office:value-type="string" table:number-columns-spanned="3"><text:p>merged</text:p></table:table-cell>
  <table:covered-table-cell table:number-columns-repeated="2"><text:p>ignored</text:p></table:covered-table-cell>
  {}
</table:table-row>"#,
        text_cell("after")
    );
    let doc = read_body(&table("S", &rows));
    let row = doc.sheet(0).unwrap().row(0).unwrap();

    assert_eq!(row.len(), 4);
    assert_eq!(row.cell(0).to_string(), "merged");
    assert!(row.cell(1).value.is_empty());
    assert!(row.cell(2).value.is_empty());
    assert_eq!(row.cell(3).to_string(), "after");
}

#[test]
fn test_header_rows_and_row_groups_are_read() {
    let rows = format!(
        r#"<table:table-header-rows><table:table-row>{}</table:table-row></table:table-header-rows>
<table:table-row-group><table:table-row>{}</table:table-row></table:table-row-group>"#,
        text_cell("header"),
        text_cell("grouped")
    );
    let doc = read_body(&table("S", &rows));
    let sheet = doc.sheet(0).unwrap();

    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.cell(0, 0).unwrap().to_string(), "header");
    assert_eq!(sheet.cell(1, 0).unwrap().to_string(), "grouped");
}

#[test]
fn test_indexed_access_agrees_with_iteration() {
    let rows = format!(
        r#"<table:table-row>{}<table:table-cell office:value-type="float" office:value="5" table:number-columns-repeated="3"/><table:table-cell/>{}</table:table-row>"#,
        text_cell("a"),
        text_cell("z")
    );
    let doc = read_body(&table("S", &rows));
    let row = doc.sheet(0).unwrap().row(0).unwrap();

    assert_eq!(row.len(), 6);
    for (i, cell) in row.iter().enumerate() {
        assert_eq!(row.get(i), Some(cell));
    }
    assert_eq!(row.get(6), None);
}
