//! Resolved visual styles and the one-pass extraction.

use crate::{package_with_styles, stylesheet, CountingSource};
use pretty_assertions::assert_eq;
use quill_sheets_core::{Color, FillStyle, Style};
use quill_sheets_xlsx::{StyleResolver, STYLES_PART};

fn round_trip_styles() -> String {
    stylesheet(
        r#"
  <numFmts count="1"><numFmt numFmtId="200" formatCode="m/d/yy"/></numFmts>
  <fonts count="2">
    <font><sz val="11"/><color theme="1"/><name val="Calibri"/><family val="2"/><scheme val="minor"/></font>
    <font><b/><sz val="14"/><color rgb="FF112233"/><name val="Calibri"/></font>
  </fonts>
  <fills count="3">
    <fill><patternFill patternType="none"/></fill>
    <fill><patternFill patternType="gray125"/></fill>
    <fill><patternFill patternType="solid"><fgColor rgb="FFFFFF00"/><bgColor indexed="64"/></patternFill></fill>
  </fills>
  <borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
  <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
  <cellXfs count="2">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
    <xf numFmtId="200" fontId="1" fillId="2" borderId="0" xfId="0" applyNumberFormat="1" applyFont="1" applyFill="1"/>
  </cellXfs>
  <cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>
"#,
    )
}

#[test]
fn test_round_trip_scenario() {
    let resolver = StyleResolver::new(package_with_styles(&round_trip_styles()));

    let style = resolver.resolve_style(1).expect("style 1");
    assert!(style.font.bold);
    assert_eq!(style.font.size, 14.0);
    assert_eq!(style.font.name, "Calibri");
    assert_eq!(style.font.color.argb_hex().as_deref(), Some("FF112233"));
    assert_eq!(style.background.and_then(|c| c.argb_hex()).as_deref(), Some("FFFFFF00"));
    assert_eq!(style.format_code.as_deref(), Some("m/d/yy"));

    assert!(resolver.is_date_style(1).unwrap());
    assert_eq!(resolver.format_code_for(1).unwrap(), "m/d/yy");
}

#[test]
fn test_default_style_is_unstyled() {
    let resolver = StyleResolver::new(package_with_styles(&round_trip_styles()));

    // applyFont/applyFill are absent, so nothing is copied
    assert_eq!(resolver.resolve_style(0).unwrap(), &Style::default());
    assert!(!resolver.is_date_style(0).unwrap());
}

#[test]
fn test_resolve_twice_extracts_once() {
    let resolver = StyleResolver::new(CountingSource::new(package_with_styles(
        &round_trip_styles(),
    )));

    let first = resolver.resolve_style(1).unwrap().clone();
    let second = resolver.resolve_style(1).unwrap().clone();
    assert_eq!(first, second);

    resolver.is_date_style(1).unwrap();
    resolver.format_code_for(1).unwrap();
    resolver.style_count().unwrap();

    assert_eq!(resolver.into_inner().opened, vec![STYLES_PART.to_string()]);
}

#[test]
fn test_registry_contents() {
    let resolver = StyleResolver::new(package_with_styles(&round_trip_styles()));
    let registry = resolver.registry().unwrap().expect("styles part present");

    assert_eq!(registry.number_format_count(), 1);
    assert_eq!(registry.font_count(), 2);
    assert_eq!(registry.fill_count(), 3);
    assert_eq!(registry.border_count(), 1);
    assert_eq!(registry.style_count(), 2);

    assert_eq!(registry.font(0).map(|f| f.color), Some(Color::Theme { index: 1, tint: 0 }));
    assert_eq!(registry.fill(1), Some(&FillStyle::None));
    assert_eq!(
        registry.fill(2),
        Some(&FillStyle::solid(Color::argb(0xFF, 0xFF, 0xFF, 0x00)))
    );
    assert_eq!(registry.record(1).and_then(|r| r.number_format_id), Some(200));
}

#[test]
fn test_unapplied_fill_and_font_are_ignored() {
    let xml = stylesheet(
        r#"
  <fonts count="2"><font/><font><i/></font></fonts>
  <fills count="2"><fill><patternFill/></fill><fill><patternFill patternType="solid"><fgColor rgb="FF0000FF"/></patternFill></fill></fills>
  <cellXfs count="3">
    <xf/>
    <xf fontId="1" fillId="1" applyFont="0" applyFill="false"/>
    <xf fontId="1" fillId="1" applyFont="1" applyFill="1"/>
  </cellXfs>
"#,
    );
    let resolver = StyleResolver::new(package_with_styles(&xml));

    assert!(resolver.resolve_style(1).unwrap().is_default());

    let applied = resolver.resolve_style(2).unwrap();
    assert!(applied.font.italic);
    assert_eq!(applied.background, Some(Color::rgb(0, 0, 255)));
}

#[test]
fn test_zero_count_sections() {
    let xml = stylesheet(
        r#"
  <numFmts count="0"/>
  <fonts count="0"/>
  <fills count="0"/>
  <borders count="0"/>
  <cellXfs count="2"><xf/><xf numFmtId="14" applyNumberFormat="1"/></cellXfs>
"#,
    );
    let resolver = StyleResolver::new(package_with_styles(&xml));
    let registry = resolver.registry().unwrap().unwrap();

    assert_eq!(registry.font_count(), 0);
    assert_eq!(registry.fill_count(), 0);
    assert_eq!(resolver.style_count().unwrap(), 2);
    assert!(resolver.is_date_style(1).unwrap());
    assert_eq!(resolver.format_code_for(1).unwrap(), "m/d/yyyy");
}

#[test]
fn test_many_styles_share_one_classification() {
    let xfs: String = (0..500)
        .map(|_| r#"<xf numFmtId="200" applyNumberFormat="1"/>"#)
        .collect();
    let xml = stylesheet(&format!(
        r#"<numFmts count="1"><numFmt numFmtId="200" formatCode="dd/mm/yyyy hh:mm"/></numFmts><cellXfs count="501"><xf/>{}</cellXfs>"#,
        xfs
    ));
    let resolver = StyleResolver::new(package_with_styles(&xml));

    for index in 1..=500 {
        assert!(resolver.is_date_style(index).unwrap());
    }
    let registry = resolver.registry().unwrap().unwrap();
    assert_eq!(registry.classified_format_count(), 1);
}
