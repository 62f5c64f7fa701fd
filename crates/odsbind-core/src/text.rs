//! Single-line rendering of cell text

use crate::cell::Cell;

/// How line breaks and tabs are handled when rendering a cell on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHandling {
    /// Leave the text untouched
    Keep,
    /// Escape control characters (`\n`, `\t`, backslash)
    Escape,
    /// Fold newlines and tabs into single spaces and trim
    #[default]
    CollapseToSpace,
    /// Keep only the first paragraph, trimmed
    FirstParagraph,
}

impl Cell {
    /// Render this cell's text on a single line
    pub fn one_line(&self, mode: TextHandling) -> String {
        one_line(&self.to_string(), mode)
    }
}

/// Render `text` on a single line according to `mode`
pub fn one_line(text: &str, mode: TextHandling) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    match mode {
        TextHandling::Keep => text,
        TextHandling::Escape => text
            .replace('\\', "\\\\")
            .replace('\t', "\\t")
            .replace('\n', "\\n"),
        TextHandling::FirstParagraph => text
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        TextHandling::CollapseToSpace => text
            .split(['\n', '\t'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .replace("  ", " ")
            .trim()
            .to_string(),
    }
}

/// Normalise line endings and fold every run of whitespace into one space
///
/// `"a \r\n\t b "` becomes `"a b"`.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.chars() {
        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
