//! Fixed 80-column record view.
//!
//! Every IGES line is evaluated against an 80-column card image: shorter
//! lines are padded with spaces, longer lines truncated. All field offsets
//! in the reader refer to this view, never to the raw line.

/// Width of an IGES card image.
pub const RECORD_WIDTH: usize = 80;

/// Zero-based offset of the section classification character.
pub const SECTION_COLUMN: usize = 72;

/// One input line, normalized to the 80-column view.
#[derive(Debug, Clone)]
pub struct RecordLine {
    cols: [char; RECORD_WIDTH],
}

impl RecordLine {
    /// Normalize a raw line (without its terminator) to 80 columns.
    pub fn from_raw(raw: &str) -> Self {
        let mut cols = [' '; RECORD_WIDTH];
        for (slot, c) in cols.iter_mut().zip(raw.chars()) {
            *slot = c;
        }
        Self { cols }
    }

    /// The section classification character at column 73.
    pub fn section_char(&self) -> char {
        self.cols[SECTION_COLUMN]
    }

    /// The character at a zero-based column offset.
    pub fn char_at(&self, index: usize) -> char {
        self.cols[index]
    }

    /// Extract a column range (zero-based, end exclusive), untrimmed.
    pub fn columns(&self, start: usize, end: usize) -> String {
        self.cols[start..end].iter().collect()
    }

    /// The record content, columns 1-72.
    pub fn content(&self) -> String {
        self.columns(0, SECTION_COLUMN)
    }
}
