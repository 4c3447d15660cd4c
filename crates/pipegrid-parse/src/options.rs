//! Parse options

use pipegrid_core::{DEFAULT_COL_WIDTH, MAX_CELL_TOKENS};

/// Options for parsing a delimited sheet.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Field delimiter (default: pipe)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Per-cell token capacity. A cell that fills it fails closed with a
    /// `TooManyTokens` error instead of growing; this is a limit, not a
    /// silent truncation.
    pub token_capacity: usize,
    /// Minimum rendered width for every column.
    pub default_col_width: u16,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            quote: b'"',
            token_capacity: MAX_CELL_TOKENS,
            default_col_width: DEFAULT_COL_WIDTH,
        }
    }
}
