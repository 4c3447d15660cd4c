//! # pipegrid-parse
//!
//! The parsing pipeline for pipegrid: three strictly sequential passes over
//! one source buffer.
//!
//! 1. [`scan_dimensions`] - count rows and the widest field count so the
//!    grid can be allocated up front
//! 2. [`CellLexer`] - tokenize every cell's raw text into a bounded stream
//!    of typed tokens, containing malformed content as per-cell errors
//! 3. [`resolve_cells`] - project each cell's first token into a display
//!    value and fit the column widths
//!
//! [`parse_sheet`] runs all three.
//!
//! ## Example
//!
//! ```rust
//! use pipegrid_core::{Resolved, SourceBuffer};
//! use pipegrid_parse::{parse_sheet, ParseOptions};
//!
//! let source = SourceBuffer::from_bytes("1|2\n3|\"hi\"\n");
//! let sheet = parse_sheet(&source, &ParseOptions::default());
//!
//! assert_eq!((sheet.rows(), sheet.cols()), (2, 2));
//! assert_eq!(sheet.cell(0, 0).unwrap().resolved, Resolved::Number(1.0));
//! ```

mod lexer;
mod options;
mod resolve;
mod scan;

pub use lexer::CellLexer;
pub use options::ParseOptions;
pub use resolve::resolve_cells;
pub use scan::{scan_dimensions, Dimensions};

use pipegrid_core::{Sheet, SourceBuffer};

/// Run the whole pipeline: scan, allocate, lex, resolve.
pub fn parse_sheet(source: &SourceBuffer, options: &ParseOptions) -> Sheet {
    let dims = scan_dimensions(source, options);
    tracing::debug!(rows = dims.rows, cols = dims.cols, "scanned dimensions");

    let mut sheet = Sheet::with_dimensions(dims.rows, dims.cols, options.default_col_width);
    CellLexer::new(source, options, &mut sheet).run();
    resolve_cells(source, &mut sheet);
    sheet
}
