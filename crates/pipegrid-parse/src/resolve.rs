//! Cell resolver
//!
//! Third pass: project each cell's first token into a display value and
//! grow the owning column's width to fit it. Multi-token streams are kept
//! as lexed but never evaluated; tokens after the first are ignored here.

use pipegrid_core::{Resolved, Sheet, SourceBuffer, TokenKind};

/// Resolve display values and column widths for the whole sheet.
///
/// Number and string first tokens become [`Resolved::Number`] and
/// [`Resolved::Text`]; any other first token leaves the cell empty.
/// Error cells keep the error written by the lexer and contribute their
/// diagnostic label's width, so the grid stays aligned around them.
/// Also marks `ends_row` on the last cell of every row for the renderer.
pub fn resolve_cells(source: &SourceBuffer, sheet: &mut Sheet) {
    let cols = sheet.cols();
    for row in 0..sheet.rows() {
        for col in 0..cols {
            let candidate = {
                let Some(cell) = sheet.cell_mut(row, col) else {
                    continue;
                };
                cell.ends_row = col + 1 == cols;

                if !cell.is_error() {
                    if let Some(token) = cell.first_token().copied() {
                        match token.kind {
                            TokenKind::Number(value) => {
                                cell.resolved = Resolved::Number(value);
                            }
                            TokenKind::String => {
                                cell.resolved = Resolved::Text(token.span.inner());
                            }
                            // References and operators are lexed but not
                            // projected into a display value.
                            _ => {}
                        }
                    }
                }

                cell.resolved.display_text(source).len() as u16
            };
            sheet.widen_col(col, candidate);
        }
    }
}
