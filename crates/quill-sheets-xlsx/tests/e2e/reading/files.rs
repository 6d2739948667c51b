//! Packages read from disk.

use crate::{stylesheet, write_package, CONTENT_TYPES};
use quill_sheets_xlsx::{StyleResolver, XlsxError, CONTENT_TYPES_PART, STYLES_PART};

#[test]
fn test_open_file() {
    let dir = tempfile::tempdir().unwrap();
    let styles = stylesheet(
        r#"<fonts count="1"><font><u/></font></fonts><cellXfs count="2"><xf/><xf numFmtId="46" fontId="0" applyFont="1"/></cellXfs>"#,
    );
    let path = write_package(
        dir.path(),
        "book.xlsx",
        &[(CONTENT_TYPES_PART, CONTENT_TYPES), (STYLES_PART, styles.as_str())],
    );

    let resolver = StyleResolver::open_file(&path).unwrap();
    assert!(resolver.resolve_style(1).unwrap().font.underline);
    assert!(resolver.is_date_style(1).unwrap());
    assert_eq!(resolver.format_code_for(1).unwrap(), "[h]:mm:ss");
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = StyleResolver::open_file(dir.path().join("missing.xlsx")).unwrap_err();
    assert!(matches!(err, XlsxError::Io(_)));
}
