//! Tests for reading cell value types.

use chrono::{Duration, FixedOffset, TimeZone};
use odsbind_core::{CellKind, CellValue};
use pretty_assertions::assert_eq;

use crate::{read_body, table, text_cell};

#[test]
fn test_string_with_space_run_and_paragraphs() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row>
  <table:table-cell office:value-type="string">
    <text:p>Hello<text:s text:c="2"/>World</text:p>
    <text:p>Second</text:p>
  </table:table-cell>
</table:table-row>"#,
    ));

    let cell = doc.sheet(0).unwrap().cell(0, 0).unwrap();
    assert_eq!(cell.value, CellValue::string("Hello  World\nSecond"));
    assert_eq!(cell.to_string(), "Hello  World\nSecond");
}

#[test]
fn test_default_space_count_is_one() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row><table:table-cell office:value-type="string"><text:p>a<text:s/>b</text:p></table:table-cell></table:table-row>"#,
    ));
    assert_eq!(
        doc.sheet(0).unwrap().cell(0, 0).unwrap().value,
        CellValue::string("a b")
    );
}

#[test]
fn test_float_values() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row>
  <table:table-cell office:value-type="float" office:value="3.14"><text:p>3,14</text:p></table:table-cell>
  <table:table-cell office:value-type="float" office:value="-100"/>
  <table:table-cell office:value-type="float" office:value="1.5E-3"/>
</table:table-row>"#,
    ));

    let row = doc.sheet(0).unwrap().row(0).unwrap();
    assert_eq!(row.cell(0).value, CellValue::Float(Some(3.14)));
    assert_eq!(row.cell(1).value.as_number(), Some(-100.0));
    assert_eq!(row.cell(2).value.as_number(), Some(0.0015));
}

#[test]
fn test_currency_value() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row><table:table-cell office:value-type="currency" office:currency="EUR" office:value="12.5"><text:p>12,50 €</text:p></table:table-cell></table:table-row>"#,
    ));

    let cell = doc.sheet(0).unwrap().cell(0, 0).unwrap();
    assert_eq!(cell.kind(), CellKind::Currency);
    assert_eq!(cell.value.as_number(), Some(12.5));
    assert_eq!(cell.value.currency(), Some("EUR"));
}

#[test]
fn test_boolean_values() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row>
  <table:table-cell office:value-type="boolean" office:boolean-value="true"><text:p>TRUE</text:p></table:table-cell>
  <table:table-cell office:value-type="boolean" office:boolean-value="FALSE"/>
  <table:table-cell office:value-type="boolean" office:boolean-value="yes"/>
</table:table-row>"#,
    ));

    let row = doc.sheet(0).unwrap().row(0).unwrap();
    assert_eq!(row.cell(0).value, CellValue::Boolean(Some(true)));
    assert_eq!(row.cell(1).value, CellValue::Boolean(Some(false)));
    assert_eq!(row.cell(2).value, CellValue::Boolean(None));
}

#[test]
fn test_date_values() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row>
  <table:table-cell office:value-type="date" office:date-value="2024-03-15"/>
  <table:table-cell office:value-type="date" office:date-value="2024-03-15T08:30:00"/>
  <table:table-cell office:value-type="date" office:date-value="2024-03-15T08:30:00+02:00"/>
</table:table-row>"#,
    ));

    let row = doc.sheet(0).unwrap().row(0).unwrap();
    let utc = FixedOffset::east_opt(0).unwrap();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    assert_eq!(
        row.cell(0).value.as_date_time(),
        Some(utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
    );
    assert_eq!(
        row.cell(1).value.as_date_time(),
        Some(utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap())
    );
    let with_offset = row.cell(2).value.as_date_time().unwrap();
    assert_eq!(with_offset, plus_two.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap());
    assert_eq!(with_offset.offset().local_minus_utc(), 7200);
}

#[test]
fn test_time_value() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row>
  <table:table-cell office:value-type="time" office:time-value="PT1H2M3S"><text:p>01:02:03</text:p></table:table-cell>
  <table:table-cell office:value-type="time" office:time-value="PT36H00M00.5S"/>
</table:table-row>"#,
    ));

    let row = doc.sheet(0).unwrap().row(0).unwrap();
    assert_eq!(row.cell(0).value, CellValue::Time(Some(Duration::seconds(3723))));
    assert_eq!(
        row.cell(1).value.as_duration(),
        Some(Duration::hours(36) + Duration::milliseconds(500))
    );
}

#[test]
fn test_formula_is_captured_verbatim() {
    let doc = read_body(&table(
        "Sheet1",
        r#"<table:table-row>
  <table:table-cell office:value-type="float" office:value="1"/>
  <table:table-cell office:value-type="float" office:value="2"/>
  <table:table-cell table:formula="of:=SUM([.A1:.B1])" office:value-type="float" office:value="3"><text:p>3</text:p></table:table-cell>
</table:table-row>"#,
    ));

    let cell = doc.sheet(0).unwrap().cell(0, 2).unwrap();
    assert_eq!(cell.formula(), Some("of:=SUM([.A1:.B1])"));
    assert_eq!(cell.value.as_number(), Some(3.0));
}

#[test]
fn test_untyped_cell_is_empty() {
    let doc = read_body(&table(
        "Sheet1",
        &format!(
            r#"<table:table-row><table:table-cell><text:p>stray</text:p></table:table-cell>{}</table:table-row>"#,
            text_cell("x")
        ),
    ));

    let row = doc.sheet(0).unwrap().row(0).unwrap();
    assert!(row.cell(0).value.is_empty());
    assert_eq!(row.cell(1).value, CellValue::string("x"));
}
