//! # pipegrid-render
//!
//! Writes a resolved [`Sheet`] as an aligned text table: one output line
//! per sheet row, columns padded to the widths the resolver computed and
//! separated by a single space. Numbers are right-aligned with one
//! fractional digit; text and error labels are left-aligned.
//!
//! The renderer only reads the sheet; all layout decisions were already
//! made by the resolver pass.

use std::io::{self, Write};

use pipegrid_core::{Resolved, Sheet, SourceBuffer};

/// Write `sheet` as an aligned table to `out`.
pub fn render<W: Write>(out: &mut W, source: &SourceBuffer, sheet: &Sheet) -> io::Result<()> {
    for row in 0..sheet.rows() {
        let Some(cells) = sheet.row(row) else {
            continue;
        };
        for (col, cell) in cells.iter().enumerate() {
            let width = sheet.col_width(col as u16) as usize;

            match cell.resolved {
                Resolved::Number(n) => write!(out, "{n:>width$.1}")?,
                Resolved::Empty => write!(out, "{:width$}", "")?,
                value => write!(out, "{:<width$}", value.display_text(source))?,
            }

            if cell.ends_row {
                writeln!(out)?;
            } else {
                write!(out, " ")?;
            }
        }
    }
    Ok(())
}

/// Render into an owned `String`.
pub fn render_to_string(source: &SourceBuffer, sheet: &Sheet) -> io::Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, source, sheet)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
