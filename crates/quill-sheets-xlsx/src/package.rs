//! Package (ZIP container) access

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::result::ZipError;

use crate::error::{XlsxError, XlsxResult};

/// Content types part every OOXML package carries
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Default location of the styles-definition part
pub const STYLES_PART: &str = "xl/styles.xml";

/// Something that can open named parts of a package
///
/// `Ok(None)` means the part does not exist, which callers treat as a
/// normal outcome rather than an error.
pub trait PartSource {
    /// Open the part at `path` for streaming
    fn open_part(&mut self, path: &str) -> XlsxResult<Option<Box<dyn Read + '_>>>;
}

impl<S: PartSource + ?Sized> PartSource for &mut S {
    fn open_part(&mut self, path: &str) -> XlsxResult<Option<Box<dyn Read + '_>>> {
        (**self).open_part(path)
    }
}

/// An XLSX package backed by a ZIP archive
pub struct XlsxPackage<R> {
    archive: zip::ZipArchive<R>,
}

impl XlsxPackage<File> {
    /// Open a package from a file path
    pub fn open_file<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        let file = File::open(path)?;
        Self::open(file)
    }
}

impl<R: Read + Seek> XlsxPackage<R> {
    /// Open a package from a reader
    pub fn open(reader: R) -> XlsxResult<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an OOXML package
        if archive.by_name(CONTENT_TYPES_PART).is_err() {
            return Err(XlsxError::InvalidFormat(format!(
                "Missing {}",
                CONTENT_TYPES_PART
            )));
        }

        Ok(Self { archive })
    }

    /// Check whether a part exists without opening it
    pub fn has_part(&self, path: &str) -> bool {
        self.archive.file_names().any(|name| name == path)
    }

    /// Number of entries in the archive
    pub fn part_count(&self) -> usize {
        self.archive.len()
    }
}

impl<R: Read + Seek> PartSource for XlsxPackage<R> {
    fn open_part(&mut self, path: &str) -> XlsxResult<Option<Box<dyn Read + '_>>> {
        match self.archive.by_name(path) {
            Ok(file) => Ok(Some(Box::new(file))),
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(XlsxError::Zip(e)),
        }
    }
}

impl<R> std::fmt::Debug for XlsxPackage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxPackage").finish_non_exhaustive()
    }
}
