//! Per-section scanners for the styles part
//!
//! Each extractor starts with the cursor on its section's start tag and
//! returns with the cursor on the section's end tag.

use std::io::BufRead;

use log::debug;
use quill_sheets_core::style::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use quill_sheets_core::{Color, FillStyle, FontStyle, NumberFormat};

use super::record::{parse_u32, CellStyleRecord};
use super::registry::StyleRegistry;
use super::Section;
use crate::cursor::{NodeCursor, XmlNode};
use crate::error::{XlsxError, XlsxResult};

/// Walk the children of `section`, calling `on_child` on each start of the
/// section's child tag, until the section's end tag.
fn scan_section<R, F>(
    cursor: &mut NodeCursor<R>,
    section: Section,
    mut on_child: F,
) -> XlsxResult<()>
where
    R: BufRead,
    F: FnMut(&mut NodeCursor<R>) -> XlsxResult<()>,
{
    let (tag, child) = (section.tag(), section.child_tag());

    // <numFmts/>
    if cursor.is_at_end(tag) {
        return Ok(());
    }

    loop {
        if !cursor.advance()? {
            return Err(XlsxError::StructuralViolation(format!(
                "document ended inside <{}>",
                tag
            )));
        }
        if cursor.is_at_end(tag) {
            return Ok(());
        }
        if cursor.is_at_start(child) {
            on_child(cursor)?;
        }
    }
}

/// `<numFmts>`: custom number formats keyed by numFmtId
pub(crate) fn extract_number_formats<R: BufRead>(
    cursor: &mut NodeCursor<R>,
    registry: &mut StyleRegistry,
) -> XlsxResult<()> {
    scan_section(cursor, Section::NumberFormats, |cursor| {
        let id = cursor
            .attribute("numFmtId")
            .ok_or(XlsxError::MissingAttribute {
                element: "numFmt",
                attribute: "numFmtId",
            })
            .and_then(|v| parse_u32("numFmt", "numFmtId", v))?;
        let code = cursor
            .attribute("formatCode")
            .ok_or(XlsxError::MissingAttribute {
                element: "numFmt",
                attribute: "formatCode",
            })?;

        registry.insert_number_format(NumberFormat::new(id, code));
        Ok(())
    })
}

/// `<fonts>`: fonts in declaration order
pub(crate) fn extract_fonts<R: BufRead>(
    cursor: &mut NodeCursor<R>,
    registry: &mut StyleRegistry,
) -> XlsxResult<()> {
    scan_section(cursor, Section::Fonts, |cursor| {
        let node = cursor.materialize_subtree()?;
        registry.push_font(read_font(&node)?);
        Ok(())
    })
}

/// `<fills>`: fills in declaration order
pub(crate) fn extract_fills<R: BufRead>(
    cursor: &mut NodeCursor<R>,
    registry: &mut StyleRegistry,
) -> XlsxResult<()> {
    scan_section(cursor, Section::Fills, |cursor| {
        let node = cursor.materialize_subtree()?;
        registry.push_fill(read_fill(&node)?);
        Ok(())
    })
}

/// `<borders>`: consumed and counted only
///
/// TODO: resolve border edges into `Style` once the style model grows a
/// border component.
pub(crate) fn extract_borders<R: BufRead>(
    cursor: &mut NodeCursor<R>,
    registry: &mut StyleRegistry,
) -> XlsxResult<()> {
    scan_section(cursor, Section::Borders, |cursor| {
        cursor.materialize_subtree()?;
        registry.push_border();
        Ok(())
    })?;
    debug!(
        "skipped {} border definitions (borders are not resolved)",
        registry.border_count()
    );
    Ok(())
}

/// `<cellXfs>`: cell style records, joined as they are read
pub(crate) fn extract_cell_styles<R: BufRead>(
    cursor: &mut NodeCursor<R>,
    registry: &mut StyleRegistry,
) -> XlsxResult<()> {
    scan_section(cursor, Section::CellStyles, |cursor| {
        let cursor: &NodeCursor<R> = cursor;
        let record = CellStyleRecord::from_attributes(|name| cursor.attribute(name))?;
        registry.push_cell_style(record)
    })
}

fn read_font(node: &XmlNode) -> XlsxResult<FontStyle> {
    let val = |child: &str| node.child(child).and_then(|n| n.attribute("val"));

    let size = match val("sz") {
        Some(v) => v.trim().parse::<f64>().map_err(|_| XlsxError::InvalidAttribute {
            element: "sz",
            attribute: "val",
            value: v.to_string(),
        })?,
        None => DEFAULT_FONT_SIZE,
    };
    let family = match val("family") {
        Some(v) => parse_u32("family", "val", v)?,
        None => DEFAULT_FONT_FAMILY,
    };
    let color = match node.child("color") {
        Some(color) => read_font_color(color)?,
        None => Color::BLACK,
    };

    Ok(FontStyle {
        name: val("name").unwrap_or(DEFAULT_FONT_NAME).to_string(),
        size,
        family,
        color,
        // Presence alone sets the flag
        bold: node.has_child("b"),
        italic: node.has_child("i"),
        underline: node.has_child("u"),
        strikethrough: node.has_child("strike"),
    })
}

/// Priority: rgb > theme > indexed > auto, black when none is usable
fn read_font_color(node: &XmlNode) -> XlsxResult<Color> {
    if let Some(rgb) = read_rgb(node)? {
        return Ok(rgb);
    }

    if let Some(index) = node.attribute("theme").and_then(|v| v.parse::<u8>().ok()) {
        let tint = node
            .attribute("tint")
            .and_then(|v| v.parse::<f64>().ok())
            .map(|t| (t * 100.0).round() as i8)
            .unwrap_or(0);
        return Ok(Color::Theme { index, tint });
    }

    if let Some(i) = node.attribute("indexed").and_then(|v| v.parse::<u8>().ok()) {
        return Ok(Color::Indexed(i));
    }

    if matches!(node.attribute("auto"), Some("1" | "true")) {
        return Ok(Color::Auto);
    }

    Ok(Color::BLACK)
}

fn read_fill(node: &XmlNode) -> XlsxResult<FillStyle> {
    let mut patterns = node.children_named("patternFill");
    let pattern = match (patterns.next(), patterns.next()) {
        (Some(pattern), None) => pattern,
        (None, _) => {
            return Err(XlsxError::StructuralViolation(
                "<fill> has no <patternFill>".into(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(XlsxError::StructuralViolation(
                "<fill> has more than one <patternFill>".into(),
            ))
        }
    };

    if pattern.attribute("patternType") != Some("solid") {
        return Ok(FillStyle::None);
    }

    let color = match pattern.child("fgColor") {
        Some(fg) => read_rgb(fg)?,
        None => None,
    };
    Ok(color.map_or(FillStyle::None, FillStyle::solid))
}

/// The `rgb` attribute of a color element, if present and non-empty
fn read_rgb(node: &XmlNode) -> XlsxResult<Option<Color>> {
    match node.attribute("rgb").map(str::trim) {
        None | Some("") => Ok(None),
        Some(hex) => Color::from_hex(hex)
            .map(Some)
            .ok_or_else(|| XlsxError::InvalidAttribute {
                element: "color",
                attribute: "rgb",
                value: hex.to_string(),
            }),
    }
}
