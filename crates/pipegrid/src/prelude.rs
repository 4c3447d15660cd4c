//! Convenient re-exports for typical usage.
//!
//! ```rust
//! use pipegrid::prelude::*;
//! ```

pub use crate::{
    load_bytes, load_path, parse_sheet, render, render_to_string, Cell, CellErrorKind, Dimensions,
    ParseOptions, RefAddress, Resolved, Sheet, SourceBuffer, Token, TokenKind,
};
