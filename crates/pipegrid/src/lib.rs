//! # pipegrid
//!
//! A viewer for pipe-delimited sheets: reads a plain-text table whose cells
//! are separated by `|`, tokenizes every cell (numbers, quoted strings,
//! `@`/`$` cell references, single-character operators), and renders the
//! result as an aligned grid.
//!
//! Malformed cells never abort a document: they turn into local error
//! states and render as short diagnostic labels.
//!
//! ## Example
//!
//! ```rust
//! use pipegrid::prelude::*;
//!
//! let (source, sheet) = pipegrid::load_bytes("1|2\n3|\"hi\"\n", &ParseOptions::default());
//!
//! assert_eq!((sheet.rows(), sheet.cols()), (2, 2));
//! assert_eq!(sheet.cell(1, 0).unwrap().resolved, Resolved::Number(3.0));
//!
//! let table = render_to_string(&source, &sheet).unwrap();
//! assert_eq!(table.lines().count(), 2);
//! ```

pub mod prelude;

use std::path::Path;

// Re-export core types
pub use pipegrid_core::{
    Cell, CellErrorKind, Error, Operator, RefAddress, Resolved, Result, Sheet, SourceBuffer, Span,
    Token, TokenKind, DEFAULT_COL_WIDTH, MAX_CELL_TOKENS,
};

// Re-export the parsing passes
pub use pipegrid_parse::{
    parse_sheet, resolve_cells, scan_dimensions, CellLexer, Dimensions, ParseOptions,
};

// Re-export the renderer
pub use pipegrid_render::{render, render_to_string};

/// Read the file at `path` and run the whole pipeline on it.
///
/// The returned buffer owns the file's bytes; every span in the sheet
/// points into it.
pub fn load_path<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<(SourceBuffer, Sheet)> {
    let source = SourceBuffer::from_path(path)?;
    let sheet = parse_sheet(&source, options);
    Ok((source, sheet))
}

/// Run the whole pipeline on in-memory bytes.
pub fn load_bytes<B: Into<Vec<u8>>>(bytes: B, options: &ParseOptions) -> (SourceBuffer, Sheet) {
    let source = SourceBuffer::from_bytes(bytes);
    let sheet = parse_sheet(&source, options);
    (source, sheet)
}
