//! Common utilities for E2E tests.

use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use quill_sheets_xlsx::{PartSource, XlsxPackage, XlsxResult, CONTENT_TYPES_PART, STYLES_PART};

/// Minimal content types part; only its presence is checked
pub const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#;

/// Wrap section markup in a `<styleSheet>` root
pub fn stylesheet(sections: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{}</styleSheet>"#,
        sections
    )
}

/// ZIP archive bytes holding `parts`
pub fn zip_bytes(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (name, content) in parts {
            zip.start_file(*name, options).expect("start zip entry");
            zip.write_all(content.as_bytes()).expect("write zip entry");
        }
        zip.finish().expect("finish zip");
    }
    buf
}

/// An in-memory package with a content types part and the given styles part
pub fn package_with_styles(styles: &str) -> XlsxPackage<Cursor<Vec<u8>>> {
    let bytes = zip_bytes(&[(CONTENT_TYPES_PART, CONTENT_TYPES), (STYLES_PART, styles)]);
    XlsxPackage::open(Cursor::new(bytes)).expect("open in-memory package")
}

/// An in-memory package with no styles part
pub fn package_without_styles() -> XlsxPackage<Cursor<Vec<u8>>> {
    let bytes = zip_bytes(&[
        (CONTENT_TYPES_PART, CONTENT_TYPES),
        ("xl/workbook.xml", "<workbook/>"),
    ]);
    XlsxPackage::open(Cursor::new(bytes)).expect("open in-memory package")
}

/// Write a package to `dir/name` and return its path
pub fn write_package(dir: &Path, name: &str, parts: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, zip_bytes(parts)).expect("write package file");
    path
}

/// A [`PartSource`] probe that counts how often parts are opened
pub struct CountingSource<S> {
    inner: S,
    pub opened: Vec<String>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            opened: Vec::new(),
        }
    }
}

impl<S: PartSource> PartSource for CountingSource<S> {
    fn open_part(&mut self, path: &str) -> XlsxResult<Option<Box<dyn Read + '_>>> {
        self.opened.push(path.to_string());
        self.inner.open_part(path)
    }
}
