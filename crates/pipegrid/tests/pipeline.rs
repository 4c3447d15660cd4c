//! End-to-end pipeline tests: bytes in, aligned grid out.

use pipegrid::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn small_sheet_parses_and_renders() {
    let (source, sheet) = load_bytes("1|2\n3|\"hi\"\n", &ParseOptions::default());

    assert_eq!((sheet.rows(), sheet.cols()), (2, 2));
    assert_eq!(sheet.cell(0, 0).unwrap().resolved, Resolved::Number(1.0));
    assert_eq!(sheet.cell(0, 1).unwrap().resolved, Resolved::Number(2.0));
    assert_eq!(sheet.cell(1, 0).unwrap().resolved, Resolved::Number(3.0));
    assert_eq!(
        sheet.cell(1, 1).unwrap().resolved.display_text(&source),
        "hi"
    );

    let table = render_to_string(&source, &sheet).unwrap();
    assert_eq!(table, " 1.0  2.0\n 3.0 hi  \n");
}

#[test]
fn quoted_delimiters_stay_inside_their_cell() {
    let (source, sheet) = load_bytes("\"a|b\"|1\n", &ParseOptions::default());

    assert_eq!(sheet.cols(), 2);
    assert_eq!(
        sheet.cell(0, 0).unwrap().resolved.display_text(&source),
        "a|b"
    );
    assert_eq!(sheet.cell(0, 1).unwrap().resolved, Resolved::Number(1.0));
}

#[test]
fn bad_cells_render_as_labels_without_aborting() {
    let input = "@Z99|1\n\"open|2\n";
    let (source, sheet) = load_bytes(input, &ParseOptions::default());

    assert_eq!(
        sheet.cell(0, 0).unwrap().error_kind(),
        Some(CellErrorKind::Bounds)
    );
    assert_eq!(sheet.cell(0, 1).unwrap().resolved, Resolved::Number(1.0));
    assert_eq!(
        sheet.cell(1, 0).unwrap().error_kind(),
        Some(CellErrorKind::UnterminatedString)
    );

    let table = render_to_string(&source, &sheet).unwrap();
    assert!(table.contains("#BOUNDS!"));
    assert!(table.contains("#UNTERM!"));
    assert_eq!(table.lines().count(), 2);
}

#[test]
fn reference_tokens_resolve_against_the_grid() {
    let (_, sheet) = load_bytes("@B2|$A1\n1|2\n", &ParseOptions::default());

    let abs = sheet.cell(0, 0).unwrap().first_token().unwrap().kind;
    assert_eq!(abs, TokenKind::RefAbsolute(RefAddress::new(1, 1)));

    let rel = sheet.cell(0, 1).unwrap().first_token().unwrap().kind;
    assert_eq!(rel, TokenKind::RefRelative(RefAddress::new(0, 0)));
}

#[test]
fn custom_delimiter() {
    let options = ParseOptions {
        delimiter: b';',
        ..ParseOptions::default()
    };
    let (source, sheet) = load_bytes("1;\"a;b\"\n", &options);

    assert_eq!(sheet.cols(), 2);
    assert_eq!(
        sheet.cell(0, 1).unwrap().resolved.display_text(&source),
        "a;b"
    );
}

#[test]
fn load_path_reads_a_real_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "10|20\n30|40\n").unwrap();

    let (_, sheet) = load_path(file.path(), &ParseOptions::default()).unwrap();
    assert_eq!((sheet.rows(), sheet.cols()), (2, 2));
    assert_eq!(sheet.cell(1, 1).unwrap().resolved, Resolved::Number(40.0));
}

#[test]
fn load_path_missing_file_is_an_error() {
    let missing = std::path::Path::new("definitely/not/here.grid");
    assert!(load_path(missing, &ParseOptions::default()).is_err());
}
