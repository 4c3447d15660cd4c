//! Dimension scanner
//!
//! First pass over the source buffer, before any grid exists: count the
//! rows and the maximum number of delimiter-separated fields on any line.
//! Purely advisory sizing; this pass raises no errors.

use pipegrid_core::SourceBuffer;

use crate::options::ParseOptions;

/// Row and column counts discovered by [`scan_dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of lines, counting a trailing line without a newline.
    pub rows: u32,
    /// Widest field count seen on any line (delimiters + 1).
    pub cols: u16,
}

/// Scan the buffer once, counting lines and fields per line.
///
/// A quote byte toggles delimiter opacity: delimiters inside a quoted span
/// do not count as field boundaries. The toggle is not validated against a
/// closing quote - an unmatched quote leaves it set for the remainder of
/// the buffer and later lines may be undercounted. A newline always ends
/// the line, quoted or not.
pub fn scan_dimensions(source: &SourceBuffer, options: &ParseOptions) -> Dimensions {
    let mut rows: u32 = 0;
    let mut cols: u16 = 0;
    let mut fields: u16 = 1;
    let mut in_string = false;
    let mut pending = false;

    for &byte in source.as_bytes() {
        pending = true;
        match byte {
            q if q == options.quote => in_string = !in_string,
            d if d == options.delimiter => {
                if !in_string {
                    fields = fields.saturating_add(1);
                }
            }
            b'\n' => {
                cols = cols.max(fields);
                rows += 1;
                fields = 1;
                pending = false;
            }
            _ => {}
        }
    }

    // A final line without a newline still counts.
    if pending {
        cols = cols.max(fields);
        rows += 1;
    }

    Dimensions { rows, cols }
}
