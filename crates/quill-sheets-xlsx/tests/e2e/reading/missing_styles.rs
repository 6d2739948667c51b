//! Packages without a styles part resolve to defaults.

use crate::{package_without_styles, CountingSource};
use quill_sheets_xlsx::{ResolverOptions, StyleResolver};

#[test]
fn test_every_query_answers_the_default() {
    let resolver = StyleResolver::new(package_without_styles());

    for index in [0, 1, 14, 1000] {
        assert!(resolver.resolve_style(index).unwrap().is_default());
        assert!(!resolver.is_date_style(index).unwrap());
        assert!(!resolver.is_date(index, 45000.0).unwrap());
        assert_eq!(resolver.format_code_for(index).unwrap(), "General");
    }
    assert_eq!(resolver.style_count().unwrap(), 0);
    assert!(resolver.registry().unwrap().is_none());
}

#[test]
fn test_absence_is_checked_once() {
    let resolver = StyleResolver::new(CountingSource::new(package_without_styles()));
    resolver.resolve_style(3).unwrap();
    resolver.is_date_style(3).unwrap();
    assert_eq!(resolver.into_inner().opened.len(), 1);
}

#[test]
fn test_custom_styles_part_path() {
    let resolver = StyleResolver::with_options(
        CountingSource::new(package_without_styles()),
        ResolverOptions::new().with_styles_part("xl/otherStyles.xml"),
    );
    assert!(resolver.resolve_style(0).unwrap().is_default());
    assert_eq!(resolver.into_inner().opened, vec!["xl/otherStyles.xml".to_string()]);
}
