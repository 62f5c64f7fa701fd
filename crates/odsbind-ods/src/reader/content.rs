//! Streaming parser for `content.xml`
//!
//! The parser makes a single forward pass with one quick-xml cursor. Elements
//! and attributes are identified by namespace URI and local name, so any
//! prefix bound to the ODF namespaces is accepted. Elements it has no use for
//! (column definitions, annotations, named ranges, nested tables) are skipped
//! as whole subtrees so the cursor always stays in step with the document
//! structure.

use std::io::BufRead;

use log::{debug, warn};
use odsbind_core::cell::{parse_date_time, parse_iso_duration};
use odsbind_core::{Cell, CellRun, CellValue, Row, Sheet};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::{OdsError, OdsResult};
use crate::options::{LimitMode, ReaderOptions};

const OFFICE_NS: &[u8] = b"urn:oasis:names:tc:opendocument:xmlns:office:1.0";
const TABLE_NS: &[u8] = b"urn:oasis:names:tc:opendocument:xmlns:table:1.0";
const TEXT_NS: &[u8] = b"urn:oasis:names:tc:opendocument:xmlns:text:1.0";

const DEFAULT_SHEET_NAME: &str = "Sheet";

/// Elements the parser acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Spreadsheet,
    Table,
    Row,
    /// `table-header-rows`, `table-row-group` and `table-rows`
    RowContainer,
    Cell,
    CoveredCell,
    Paragraph,
    Space,
    Other,
}

impl Tag {
    fn resolve(ns: &ResolveResult<'_>, local: &[u8]) -> Self {
        let ResolveResult::Bound(Namespace(uri)) = ns else {
            return Tag::Other;
        };
        match (*uri, local) {
            (OFFICE_NS, b"spreadsheet") => Tag::Spreadsheet,
            (TABLE_NS, b"table") => Tag::Table,
            (TABLE_NS, b"table-row") => Tag::Row,
            (TABLE_NS, b"table-header-rows" | b"table-row-group" | b"table-rows") => {
                Tag::RowContainer
            }
            (TABLE_NS, b"table-cell") => Tag::Cell,
            (TABLE_NS, b"covered-table-cell") => Tag::CoveredCell,
            (TEXT_NS, b"p") => Tag::Paragraph,
            (TEXT_NS, b"s") => Tag::Space,
            _ => Tag::Other,
        }
    }
}

/// Single-pass parser over `content.xml`
pub(crate) struct ContentParser<'a, R> {
    xml: NsReader<R>,
    options: &'a ReaderOptions,
}

/// Per-table row bookkeeping
struct TableState {
    name: String,
    rows: Vec<Row>,
    truncated: bool,
}

/// Attributes of a `table:table-cell` that matter for its value
#[derive(Default)]
struct CellAttrs {
    value_type: Option<String>,
    value: Option<String>,
    currency: Option<String>,
    boolean_value: Option<String>,
    date_value: Option<String>,
    time_value: Option<String>,
    formula: Option<String>,
    repeat: Option<String>,
}

impl<'a, R: BufRead> ContentParser<'a, R> {
    pub(crate) fn new(source: R, options: &'a ReaderOptions) -> Self {
        Self {
            xml: NsReader::from_reader(source),
            options,
        }
    }

    /// Parse every sheet of the spreadsheet body
    pub(crate) fn parse(mut self) -> OdsResult<Vec<Sheet>> {
        if !self.seek_spreadsheet()? {
            return Ok(Vec::new());
        }

        let mut sheets = Vec::new();
        let mut buf = Vec::new();

        loop {
            match self.next(&mut buf)? {
                (Tag::Table, Event::Start(e)) => {
                    self.check_sheet_limit(sheets.len())?;
                    let name = self.sheet_name(&e)?;
                    sheets.push(self.read_table(name)?);
                }
                (Tag::Table, Event::Empty(e)) => {
                    self.check_sheet_limit(sheets.len())?;
                    let name = self.sheet_name(&e)?;
                    debug!("parsed sheet '{}': 0 rows", name);
                    sheets.push(Sheet::new(name, Vec::new(), self.options.max_columns_per_row));
                }
                (_, Event::Start(_)) => self.skip()?,
                (Tag::Spreadsheet, Event::End(_)) => break,
                (_, Event::Eof) => return Err(unexpected_eof("office:spreadsheet")),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read the next event along with the element it names
    fn next<'b>(&mut self, buf: &'b mut Vec<u8>) -> OdsResult<(Tag, Event<'b>)> {
        let (ns, event) = self.xml.read_resolved_event_into(buf)?;
        let tag = match &event {
            Event::Start(e) | Event::Empty(e) => Tag::resolve(&ns, e.local_name().as_ref()),
            Event::End(e) => Tag::resolve(&ns, e.local_name().as_ref()),
            _ => Tag::Other,
        };
        Ok((tag, event))
    }

    /// Advance to `office:spreadsheet`
    ///
    /// Returns `false` for a self-closing (empty) spreadsheet body.
    fn seek_spreadsheet(&mut self) -> OdsResult<bool> {
        let mut buf = Vec::new();
        loop {
            match self.next(&mut buf)? {
                (Tag::Spreadsheet, Event::Start(_)) => return Ok(true),
                (Tag::Spreadsheet, Event::Empty(_)) => return Ok(false),
                (_, Event::Eof) => {
                    return Err(OdsError::InvalidFormat(
                        "office:spreadsheet not found in content.xml".to_string(),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }
    }

    fn check_sheet_limit(&self, parsed: usize) -> OdsResult<()> {
        if parsed >= self.options.max_sheets {
            return Err(OdsError::LimitExceeded {
                what: "sheet count".to_string(),
                limit: self.options.max_sheets,
            });
        }
        Ok(())
    }

    /// Read rows until the matching `</table:table>`
    fn read_table(&mut self, name: String) -> OdsResult<Sheet> {
        let mut table = TableState {
            name,
            rows: Vec::with_capacity(128),
            truncated: false,
        };
        let mut buf = Vec::new();

        loop {
            match self.next(&mut buf)? {
                (Tag::Row, Event::Start(e)) => {
                    let repeat = self.row_repeat(&e)?;
                    if table.truncated {
                        self.skip()?;
                    } else {
                        let row = self.read_row()?;
                        self.push_rows(&mut table, row, repeat)?;
                    }
                }
                (Tag::Row, Event::Empty(e)) => {
                    let repeat = self.row_repeat(&e)?;
                    if !table.truncated {
                        self.push_rows(&mut table, Row::default(), repeat)?;
                    }
                }
                // Row containers: descend, their rows count like any other
                (Tag::RowContainer, Event::Start(_)) => {}
                (_, Event::Start(_)) => self.skip()?,
                (Tag::Table, Event::End(_)) => break,
                (_, Event::Eof) => return Err(unexpected_eof("table:table")),
                _ => {}
            }
            buf.clear();
        }

        debug!("parsed sheet '{}': {} rows", table.name, table.rows.len());
        Ok(Sheet::new(
            table.name,
            table.rows,
            self.options.max_columns_per_row,
        ))
    }

    fn row_repeat(&self, e: &BytesStart<'_>) -> OdsResult<usize> {
        let raw = self.attr_value(e, TABLE_NS, b"number-rows-repeated")?;
        Ok(parse_repeat(raw.as_deref(), self.options.max_repeated_rows))
    }

    /// Append `repeat` copies of `row`, honouring the row budget
    fn push_rows(&self, table: &mut TableState, row: Row, repeat: usize) -> OdsResult<()> {
        if repeat == 0 {
            return Ok(());
        }
        if self.options.collapse_empty_repeated_rows && row.is_effectively_empty() {
            return Ok(());
        }

        let limit = self.options.max_rows_per_sheet;
        let remaining = limit.saturating_sub(table.rows.len());
        if repeat > remaining {
            match self.options.limit_mode {
                LimitMode::Throw => {
                    return Err(OdsError::LimitExceeded {
                        what: format!("row count in sheet '{}'", table.name),
                        limit,
                    })
                }
                LimitMode::Truncate => {
                    warn!(
                        "sheet '{}' exceeds {} rows, remaining rows are ignored",
                        table.name, limit
                    );
                    table.truncated = true;
                }
            }
        }

        let take = repeat.min(remaining);
        table.rows.extend(std::iter::repeat(row).take(take));
        Ok(())
    }

    /// Read cells until the matching `</table:table-row>`
    fn read_row(&mut self) -> OdsResult<Row> {
        let max_columns = self.options.max_columns_per_row;
        let mut segments: Vec<CellRun> = Vec::with_capacity(16);
        let mut columns = 0usize;
        let mut buf = Vec::new();

        loop {
            match self.next(&mut buf)? {
                (Tag::Cell, Event::Start(e)) if columns < max_columns => {
                    let run = self.read_cell(&e, false)?;
                    columns = columns.saturating_add(run.run);
                    segments.push(run);
                }
                (Tag::Cell, Event::Empty(e)) if columns < max_columns => {
                    let run = self.read_cell(&e, true)?;
                    columns = columns.saturating_add(run.run);
                    segments.push(run);
                }
                (Tag::CoveredCell, Event::Start(e)) if columns < max_columns => {
                    let repeat = self.column_repeat(&e)?;
                    self.skip()?;
                    columns = columns.saturating_add(repeat);
                    segments.push(CellRun::new(Cell::empty(), repeat));
                }
                (Tag::CoveredCell, Event::Empty(e)) if columns < max_columns => {
                    let repeat = self.column_repeat(&e)?;
                    columns = columns.saturating_add(repeat);
                    segments.push(CellRun::new(Cell::empty(), repeat));
                }
                (_, Event::Start(_)) => self.skip()?,
                (Tag::Row, Event::End(_)) => break,
                (_, Event::Eof) => return Err(unexpected_eof("table:table-row")),
                _ => {}
            }
            buf.clear();
        }

        Ok(Row::from_segments(
            segments,
            max_columns,
            self.options.trim_trailing_empty_cells,
        ))
    }

    fn column_repeat(&self, e: &BytesStart<'_>) -> OdsResult<usize> {
        let raw = self.attr_value(e, TABLE_NS, b"number-columns-repeated")?;
        Ok(parse_repeat(raw.as_deref(), self.options.max_repeated_columns))
    }

    /// Read one `table:table-cell`, consuming its children when it has any
    fn read_cell(&mut self, e: &BytesStart<'_>, is_empty: bool) -> OdsResult<CellRun> {
        let attrs = self.cell_attrs(e)?;
        let repeat = parse_repeat(attrs.repeat.as_deref(), self.options.max_repeated_columns);

        let value = match attrs.value_type.as_deref() {
            Some("string") => {
                let text = if is_empty {
                    String::new()
                } else {
                    self.read_cell_text()?
                };
                CellValue::String(text)
            }
            Some(other) => {
                if !is_empty {
                    self.skip()?;
                }
                typed_value(other, &attrs)
            }
            None => {
                if !is_empty {
                    self.skip()?;
                }
                CellValue::Empty
            }
        };

        Ok(CellRun::new(Cell::with_formula(value, attrs.formula), repeat))
    }

    /// Join the cell's paragraphs with `\n`, skipping every other child
    ///
    /// Text written directly inside the cell is kept; whitespace between
    /// elements is not.
    fn read_cell_text(&mut self) -> OdsResult<String> {
        let mut text = String::new();
        let mut paragraphs = 0usize;
        let mut buf = Vec::new();

        loop {
            match self.next(&mut buf)? {
                (Tag::Paragraph, Event::Start(_)) => {
                    if paragraphs > 0 {
                        text.push('\n');
                    }
                    paragraphs += 1;
                    self.read_paragraph(&mut text)?;
                }
                (Tag::Paragraph, Event::Empty(_)) => {
                    if paragraphs > 0 {
                        text.push('\n');
                    }
                    paragraphs += 1;
                }
                (_, Event::Text(t)) => {
                    let t = t.unescape()?;
                    if !is_xml_whitespace(&t) {
                        text.push_str(&t);
                    }
                }
                (_, Event::Start(_)) => self.skip()?,
                (Tag::Cell, Event::End(_)) => break,
                (_, Event::Eof) => return Err(unexpected_eof("table:table-cell")),
                _ => {}
            }
            buf.clear();
        }

        Ok(text)
    }

    /// Append the flattened text of one `text:p` to `out`
    ///
    /// Inline markup (`text:span`, `text:a`, ...) contributes its text;
    /// `text:s` expands to spaces at any depth.
    fn read_paragraph(&mut self, out: &mut String) -> OdsResult<()> {
        let mut depth = 0usize;
        let mut buf = Vec::new();

        loop {
            match self.next(&mut buf)? {
                (_, Event::Text(t)) => out.push_str(&t.unescape()?),
                (_, Event::CData(c)) => out.push_str(&String::from_utf8_lossy(&c)),
                (Tag::Space, Event::Empty(e)) => self.push_spaces(&e, out)?,
                (Tag::Space, Event::Start(e)) => {
                    self.push_spaces(&e, out)?;
                    self.skip()?;
                }
                (_, Event::Start(_)) => depth += 1,
                (_, Event::End(_)) if depth > 0 => depth -= 1,
                (_, Event::End(_)) => break,
                (_, Event::Eof) => return Err(unexpected_eof("text:p")),
                _ => {}
            }
            buf.clear();
        }

        Ok(())
    }

    fn push_spaces(&self, e: &BytesStart<'_>, out: &mut String) -> OdsResult<()> {
        let raw = self.attr_value(e, TEXT_NS, b"c")?;
        let count = parse_repeat(raw.as_deref(), self.options.max_text_space_run);
        out.extend(std::iter::repeat(' ').take(count));
        Ok(())
    }

    /// Consume the rest of the element whose start tag was just read
    ///
    /// Events go through the namespace-aware reader so bindings declared
    /// inside the skipped subtree go out of scope with it.
    fn skip(&mut self) -> OdsResult<()> {
        let mut depth = 0usize;
        let mut buf = Vec::new();

        loop {
            match self.xml.read_event_into(&mut buf)? {
                Event::Start(_) => depth += 1,
                Event::End(_) if depth == 0 => return Ok(()),
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(unexpected_eof("skipped element")),
                _ => {}
            }
            buf.clear();
        }
    }

    fn sheet_name(&self, e: &BytesStart<'_>) -> OdsResult<String> {
        Ok(self
            .attr_value(e, TABLE_NS, b"name")?
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()))
    }

    /// Value of the attribute `local` in namespace `ns`, whatever its prefix
    fn attr_value(&self, e: &BytesStart<'_>, ns: &[u8], local: &[u8]) -> OdsResult<Option<String>> {
        for attr in e.attributes().flatten() {
            if let (ResolveResult::Bound(Namespace(uri)), name) = self.xml.resolve_attribute(attr.key)
            {
                if uri == ns && name.as_ref() == local {
                    return Ok(Some(attr.unescape_value()?.into_owned()));
                }
            }
        }
        Ok(None)
    }

    fn cell_attrs(&self, e: &BytesStart<'_>) -> OdsResult<CellAttrs> {
        let mut attrs = CellAttrs::default();
        for attr in e.attributes().flatten() {
            let (ResolveResult::Bound(Namespace(uri)), name) = self.xml.resolve_attribute(attr.key)
            else {
                continue;
            };
            let slot = match (uri, name.as_ref()) {
                (OFFICE_NS, b"value-type") => &mut attrs.value_type,
                (OFFICE_NS, b"value") => &mut attrs.value,
                (OFFICE_NS, b"currency") => &mut attrs.currency,
                (OFFICE_NS, b"boolean-value") => &mut attrs.boolean_value,
                (OFFICE_NS, b"date-value") => &mut attrs.date_value,
                (OFFICE_NS, b"time-value") => &mut attrs.time_value,
                (TABLE_NS, b"formula") => &mut attrs.formula,
                (TABLE_NS, b"number-columns-repeated") => &mut attrs.repeat,
                _ => continue,
            };
            *slot = Some(attr.unescape_value()?.into_owned());
        }
        Ok(attrs)
    }
}

/// Build the value of a non-string cell from its attributes
///
/// Malformed literals leave the type in place with an absent value.
fn typed_value(value_type: &str, attrs: &CellAttrs) -> CellValue {
    match value_type {
        "float" => CellValue::Float(attrs.value.as_deref().and_then(parse_float)),
        "currency" => CellValue::Currency {
            value: attrs.value.as_deref().and_then(parse_float),
            currency: attrs.currency.clone(),
        },
        "boolean" => CellValue::Boolean(attrs.boolean_value.as_deref().and_then(parse_bool)),
        "date" => CellValue::Date(attrs.date_value.as_deref().and_then(parse_date_time)),
        "time" => CellValue::Time(attrs.time_value.as_deref().and_then(parse_iso_duration)),
        _ => CellValue::Empty,
    }
}

fn is_xml_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Parse a repeat count: absent or unparseable is 1, clamped to `[0, max]`
fn parse_repeat(raw: Option<&str>, max: usize) -> usize {
    let Some(raw) = raw else {
        return 1;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n <= 0 => 0,
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX).min(max),
        Err(_) => 1.min(max),
    }
}

/// Parse an invariant-culture real, tolerating thousands separators
fn parse_float(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>()
        .ok()
        .or_else(|| raw.replace(',', "").parse::<f64>().ok())
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn unexpected_eof(inside: &str) -> OdsError {
    OdsError::InvalidFormat(format!("unexpected end of content.xml inside {}", inside))
}
