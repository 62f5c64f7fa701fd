//! Document type - the parsed spreadsheet

use crate::error::{Error, Result};
use crate::sheet::Sheet;

/// A parsed spreadsheet document
///
/// Sheets are kept in the order they appear in the container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    /// Create a document from parsed sheets
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the document has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All sheets
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get the first sheet whose name matches exactly
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Get the first sheet whose name matches exactly, or fail
    pub fn sheet_named(&self, name: &str) -> Result<&Sheet> {
        self.sheet_by_name(name).ok_or_else(|| Error::SheetNotFound {
            sheet: name.to_string(),
            available: self.sheet_names().join(", "),
        })
    }

    /// Get a sheet by index, or fail
    pub fn try_sheet(&self, index: usize) -> Result<&Sheet> {
        self.sheets
            .get(index)
            .ok_or(Error::SheetOutOfBounds(index, self.sheets.len()))
    }

    /// Names of all sheets, in order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }
}

impl IntoIterator for Document {
    type Item = Sheet;
    type IntoIter = std::vec::IntoIter<Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.into_iter()
    }
}
