//! # pipegrid-core
//!
//! Core data structures for the pipegrid sheet viewer.
//!
//! This crate provides the fundamental types used throughout pipegrid:
//! - [`SourceBuffer`] and [`Span`] - The raw input file and views into it
//! - [`Token`] and [`TokenKind`] - Classified lexical units inside a cell
//! - [`Cell`] and [`Resolved`] - One grid position's parsed state
//! - [`Sheet`] - The row-major grid plus per-column display widths
//! - [`RefAddress`] - Spreadsheet-style reference coordinates (letters+digits)
//!
//! ## Example
//!
//! ```rust
//! use pipegrid_core::{RefAddress, Sheet};
//!
//! let addr = RefAddress::parse("B3").unwrap();
//! assert_eq!((addr.row, addr.col), (2, 1));
//!
//! let sheet = Sheet::with_dimensions(2, 3, 4);
//! assert_eq!(sheet.rows(), 2);
//! assert_eq!(sheet.cols(), 3);
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod sheet;
pub mod source;
pub mod token;

// Re-exports for convenience
pub use address::RefAddress;
pub use cell::{Cell, CellErrorKind, Resolved};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use source::{SourceBuffer, Span};
pub use token::{Operator, Token, TokenKind};

/// Per-cell token capacity; a cell that fills it fails closed rather than
/// growing. Configurable per parse, this is only the default.
pub const MAX_CELL_TOKENS: usize = 8;

/// Minimum rendered width of a column when nothing wider was seen.
pub const DEFAULT_COL_WIDTH: u16 = 4;
