//! Styles part (`xl/styles.xml`) extraction
//!
//! One forward pass over the part fills a [`StyleRegistry`]. The pass is a
//! loop over the cursor that dispatches on section start tags; each section
//! is consumed by its own extractor up to the matching end tag.

mod classifier;
mod extract;
mod record;
mod registry;

use std::io::BufRead;

use log::debug;

use crate::cursor::{NodeCursor, NodeKind};
use crate::error::XlsxResult;

pub use classifier::DateFormatClassifier;
pub use record::CellStyleRecord;
pub use registry::StyleRegistry;

/// Sections of the styles part that feed the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    NumberFormats,
    Fonts,
    Fills,
    Borders,
    CellStyles,
}

impl Section {
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "numFmts" => Section::NumberFormats,
            "fonts" => Section::Fonts,
            "fills" => Section::Fills,
            "borders" => Section::Borders,
            "cellXfs" => Section::CellStyles,
            _ => return None,
        })
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            Section::NumberFormats => "numFmts",
            Section::Fonts => "fonts",
            Section::Fills => "fills",
            Section::Borders => "borders",
            Section::CellStyles => "cellXfs",
        }
    }

    pub(crate) fn child_tag(self) -> &'static str {
        match self {
            Section::NumberFormats => "numFmt",
            Section::Fonts => "font",
            Section::Fills => "fill",
            Section::Borders => "border",
            Section::CellStyles => "xf",
        }
    }

    fn extract<R: BufRead>(
        self,
        cursor: &mut NodeCursor<R>,
        registry: &mut StyleRegistry,
    ) -> XlsxResult<()> {
        match self {
            Section::NumberFormats => extract::extract_number_formats(cursor, registry),
            Section::Fonts => extract::extract_fonts(cursor, registry),
            Section::Fills => extract::extract_fills(cursor, registry),
            Section::Borders => extract::extract_borders(cursor, registry),
            Section::CellStyles => extract::extract_cell_styles(cursor, registry),
        }
    }
}

/// Read a whole styles part into a registry
///
/// Sections declaring `count="0"` are skipped and leave their registry
/// empty. Any malformed section aborts the pass.
pub(crate) fn read_styles<R: BufRead>(cursor: &mut NodeCursor<R>) -> XlsxResult<StyleRegistry> {
    let mut registry = StyleRegistry::new();

    while cursor.advance()? {
        if cursor.kind() == Some(NodeKind::End) {
            continue;
        }
        let Some(section) = cursor.name().and_then(Section::from_tag) else {
            continue;
        };

        if cursor.attribute("count") == Some("0") {
            debug!("<{}> declares count=\"0\", skipping", section.tag());
            continue;
        }

        section.extract(cursor, &mut registry)?;
    }

    Ok(registry)
}
