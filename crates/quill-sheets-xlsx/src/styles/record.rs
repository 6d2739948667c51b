//! Raw `<xf>` records from the `cellXfs` section

use crate::error::{XlsxError, XlsxResult};

/// One declared cell format, exactly as written in the styles part
///
/// Its position in `cellXfs` is the style index cells refer to. Missing
/// attributes stay `None`; no defaults are substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyleRecord {
    pub number_format_id: Option<u32>,
    pub apply_number_format: Option<bool>,
    pub font_id: Option<u32>,
    pub apply_font: Option<bool>,
    pub fill_id: Option<u32>,
    pub apply_fill: Option<bool>,
    pub border_id: Option<u32>,
    pub apply_border: Option<bool>,
}

impl CellStyleRecord {
    /// Build a record from an attribute lookup on an `<xf>` element
    pub(crate) fn from_attributes<'a, F>(attribute: F) -> XlsxResult<Self>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let id = |name: &'static str| {
            attribute(name)
                .map(|v| parse_u32("xf", name, v))
                .transpose()
        };
        let flag = |name: &'static str| {
            attribute(name)
                .map(|v| parse_bool("xf", name, v))
                .transpose()
        };

        Ok(Self {
            number_format_id: id("numFmtId")?,
            apply_number_format: flag("applyNumberFormat")?,
            font_id: id("fontId")?,
            apply_font: flag("applyFont")?,
            fill_id: id("fillId")?,
            apply_fill: flag("applyFill")?,
            border_id: id("borderId")?,
            apply_border: flag("applyBorder")?,
        })
    }
}

/// Parse an `xsd:boolean` attribute value
pub(crate) fn parse_bool(
    element: &'static str,
    attribute: &'static str,
    value: &str,
) -> XlsxResult<bool> {
    match value.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(XlsxError::InvalidAttribute {
            element,
            attribute,
            value: value.to_string(),
        }),
    }
}

/// Parse an unsigned integer attribute value
pub(crate) fn parse_u32(
    element: &'static str,
    attribute: &'static str,
    value: &str,
) -> XlsxResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| XlsxError::InvalidAttribute {
            element,
            attribute,
            value: value.to_string(),
        })
}
