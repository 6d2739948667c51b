//! Memoized date-format classification per numFmtId

use std::cell::RefCell;

use ahash::AHashMap;
use quill_sheets_core::{is_builtin_date_format, is_date_format_code};

/// Decides whether a numFmtId denotes a date/time, once per id
///
/// Many style indices share one number format, so the cache is keyed by
/// numFmtId rather than by style index.
#[derive(Debug, Default)]
pub struct DateFormatClassifier {
    cache: RefCell<AHashMap<u32, bool>>,
}

impl DateFormatClassifier {
    /// Create a classifier with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `id`, consulting `custom_code` for non-built-in ids
    ///
    /// `custom_code` is only called on a cache miss.
    pub fn is_date_format<'a, F>(&self, id: u32, custom_code: F) -> bool
    where
        F: FnOnce(u32) -> Option<&'a str>,
    {
        if let Some(&cached) = self.cache.borrow().get(&id) {
            return cached;
        }

        let is_date =
            is_builtin_date_format(id) || custom_code(id).is_some_and(is_date_format_code);
        self.cache.borrow_mut().insert(id, is_date);
        is_date
    }

    /// Number of ids classified so far
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}
