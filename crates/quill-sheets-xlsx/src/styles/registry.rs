//! In-memory store of everything read from a styles part

use ahash::AHashMap;
use quill_sheets_core::{builtin_date_format, FillStyle, FontStyle, NumberFormat, Style};

use super::classifier::DateFormatClassifier;
use super::record::CellStyleRecord;
use crate::error::{XlsxError, XlsxResult};

/// Number formats, fonts, fills and resolved cell styles of one workbook
///
/// Fonts, fills and cell styles are indexed in declaration order. Each
/// resolved [`Style`] is built when its record is read, so fonts and fills
/// must already be declared by then.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    number_formats: AHashMap<u32, NumberFormat>,
    fonts: Vec<FontStyle>,
    fills: Vec<FillStyle>,
    border_count: usize,
    records: Vec<CellStyleRecord>,
    styles: Vec<Style>,
    classifier: DateFormatClassifier,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_number_format(&mut self, format: NumberFormat) {
        self.number_formats.insert(format.id, format);
    }

    pub(crate) fn push_font(&mut self, font: FontStyle) {
        self.fonts.push(font);
    }

    pub(crate) fn push_fill(&mut self, fill: FillStyle) {
        self.fills.push(fill);
    }

    pub(crate) fn push_border(&mut self) {
        self.border_count += 1;
    }

    /// Join `record` against the registries and append the result
    pub(crate) fn push_cell_style(&mut self, record: CellStyleRecord) -> XlsxResult<()> {
        let style = self.join(&record)?;
        self.records.push(record);
        self.styles.push(style);
        Ok(())
    }

    /// Build the resolved style a record denotes
    ///
    /// Font and fill are copied only when the record's `applyFont` /
    /// `applyFill` flag is set. Borders are not resolved.
    pub fn join(&self, record: &CellStyleRecord) -> XlsxResult<Style> {
        let mut style = Style::default();

        if let (Some(true), Some(font_id)) = (record.apply_font, record.font_id) {
            style.font = self
                .fonts
                .get(font_id as usize)
                .cloned()
                .ok_or(XlsxError::IndexOutOfRange {
                    kind: "font",
                    index: font_id,
                    len: self.fonts.len(),
                })?;
        }

        if let (Some(true), Some(fill_id)) = (record.apply_fill, record.fill_id) {
            let fill = self
                .fills
                .get(fill_id as usize)
                .ok_or(XlsxError::IndexOutOfRange {
                    kind: "fill",
                    index: fill_id,
                    len: self.fills.len(),
                })?;
            style.background = fill.color();
        }

        if let Some(id) = record.number_format_id {
            style.format_code = self.format_code(id).map(str::to_owned);
        }

        Ok(style)
    }

    /// Format code for a numFmtId: built-in date table first, then the
    /// document's custom formats
    pub fn format_code(&self, id: u32) -> Option<&str> {
        builtin_date_format(id).or_else(|| self.custom_format_code(id))
    }

    fn custom_format_code(&self, id: u32) -> Option<&str> {
        self.number_formats.get(&id).map(|f| f.code.as_str())
    }

    /// Check whether values under `style_index` are dates
    ///
    /// Total over all indices: style 0 and undeclared indices are never
    /// dates, and neither is a record with `applyNumberFormat="0"`.
    pub fn is_date_style(&self, style_index: u32) -> bool {
        if style_index == 0 {
            return false;
        }
        let Some(record) = self.records.get(style_index as usize) else {
            return false;
        };
        if record.apply_number_format == Some(false) {
            return false;
        }
        let Some(id) = record.number_format_id else {
            return false;
        };

        self.classifier
            .is_date_format(id, |id| self.custom_format_code(id))
    }

    /// Resolved style at `style_index`
    pub fn style(&self, style_index: u32) -> XlsxResult<&Style> {
        self.styles
            .get(style_index as usize)
            .ok_or(XlsxError::StyleNotFound {
                index: style_index,
                count: self.styles.len(),
            })
    }

    /// Display format code of the style at `style_index`
    pub fn format_code_for(&self, style_index: u32) -> XlsxResult<&str> {
        self.style(style_index)?
            .format_code
            .as_deref()
            .ok_or(XlsxError::FormatCodeNotFound(style_index))
    }

    /// Raw record at `style_index`
    pub fn record(&self, style_index: u32) -> Option<&CellStyleRecord> {
        self.records.get(style_index as usize)
    }

    /// Custom number format declared with `id`
    pub fn number_format(&self, id: u32) -> Option<&NumberFormat> {
        self.number_formats.get(&id)
    }

    /// Font at declaration index `index`
    pub fn font(&self, index: u32) -> Option<&FontStyle> {
        self.fonts.get(index as usize)
    }

    /// Fill at declaration index `index`
    pub fn fill(&self, index: u32) -> Option<&FillStyle> {
        self.fills.get(index as usize)
    }

    /// All resolved styles in style-index order
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn number_format_count(&self) -> usize {
        self.number_formats.len()
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// Borders are counted but not resolved into styles
    pub fn border_count(&self) -> usize {
        self.border_count
    }

    /// Number of distinct numFmtIds classified so far
    pub fn classified_format_count(&self) -> usize {
        self.classifier.cached_len()
    }
}
