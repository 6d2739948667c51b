//! Malformed styles parts and query errors.

use crate::{package_with_styles, stylesheet, zip_bytes, CountingSource};
use quill_sheets_xlsx::{StyleResolver, XlsxError, XlsxPackage, STYLES_PART};
use std::io::Cursor;

#[test]
fn test_font_index_past_end() {
    let xml = stylesheet(
        r#"<fonts count="1"><font/></fonts><cellXfs count="2"><xf/><xf fontId="5" applyFont="1"/></cellXfs>"#,
    );
    let resolver = StyleResolver::new(package_with_styles(&xml));

    let err = resolver.resolve_style(1).unwrap_err();
    assert!(
        matches!(
            err,
            XlsxError::IndexOutOfRange {
                kind: "font",
                index: 5,
                len: 1
            }
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn test_fill_index_past_end() {
    let xml = stylesheet(
        r#"<fills count="1"><fill><patternFill/></fill></fills><cellXfs count="1"><xf fillId="1" applyFill="1"/></cellXfs>"#,
    );
    let resolver = StyleResolver::new(package_with_styles(&xml));
    assert!(matches!(
        resolver.resolve_style(0),
        Err(XlsxError::IndexOutOfRange { kind: "fill", .. })
    ));
}

#[test]
fn test_failure_is_permanent() {
    let xml = stylesheet(r#"<numFmts count="1"><numFmt numFmtId="164"/></numFmts>"#);
    let resolver = StyleResolver::new(CountingSource::new(package_with_styles(&xml)));

    assert!(matches!(
        resolver.is_date_style(1),
        Err(XlsxError::MissingAttribute {
            element: "numFmt",
            attribute: "formatCode"
        })
    ));
    for _ in 0..3 {
        assert!(matches!(
            resolver.resolve_style(0),
            Err(XlsxError::ExtractionFailed(_))
        ));
    }
    assert_eq!(resolver.into_inner().opened.len(), 1);
}

#[test]
fn test_fill_needs_exactly_one_pattern() {
    let xml = stylesheet(r#"<fills count="1"><fill><gradientFill degree="90"/></fill></fills>"#);
    let resolver = StyleResolver::new(package_with_styles(&xml));
    assert!(matches!(
        resolver.load(),
        Err(XlsxError::StructuralViolation(_))
    ));
}

#[test]
fn test_truncated_part() {
    let xml = stylesheet(r#"<cellXfs count="2"><xf/>"#).replace("</styleSheet>", "");
    let resolver = StyleResolver::new(package_with_styles(&xml));
    assert!(resolver.load().is_err());
}

#[test]
fn test_invalid_attribute_values() {
    let xml = stylesheet(r#"<cellXfs count="1"><xf numFmtId="abc"/></cellXfs>"#);
    let resolver = StyleResolver::new(package_with_styles(&xml));
    assert!(matches!(
        resolver.load(),
        Err(XlsxError::InvalidAttribute {
            element: "xf",
            attribute: "numFmtId",
            ..
        })
    ));
}

#[test]
fn test_out_of_range_query() {
    let xml = stylesheet(r#"<cellXfs count="1"><xf/></cellXfs>"#);
    let resolver = StyleResolver::new(package_with_styles(&xml));
    assert!(matches!(
        resolver.resolve_style(1),
        Err(XlsxError::StyleNotFound { index: 1, count: 1 })
    ));
    assert!(matches!(
        resolver.format_code_for(0),
        Err(XlsxError::FormatCodeNotFound(0))
    ));
    // A query error does not poison the resolver
    assert!(resolver.resolve_style(0).is_ok());
}

#[test]
fn test_not_a_package() {
    let bytes = zip_bytes(&[(STYLES_PART, "<styleSheet/>")]);
    assert!(matches!(
        XlsxPackage::open(Cursor::new(bytes)),
        Err(XlsxError::InvalidFormat(_))
    ));
    assert!(matches!(
        XlsxPackage::open(Cursor::new(b"not a zip".to_vec())),
        Err(XlsxError::Zip(_))
    ));
}
