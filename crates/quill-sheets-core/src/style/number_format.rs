//! Number format types and date-format classification

/// Escape marker inside format codes: the following character is a literal
const ESCAPE: char = '\\';

/// Tokens that mark a format code as date/time, tested in this order
const DATE_TOKENS: [&str; 6] = ["e", "yy", "m", "d", "h", "s"];

/// Built-in date/time formats: (numFmtId, format code)
///
/// This is a closed set. Other built-in ids (0-13, 37-44, 48, 49, ...) are
/// never dates and have no format code through this table.
pub const BUILTIN_DATE_FORMATS: [(u32, &str); 12] = [
    (14, "m/d/yyyy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yyyy h:mm"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mm:ss.0"),
];

/// A document-declared number format
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormat {
    /// numFmtId referenced by cell styles
    pub id: u32,
    /// Format code (e.g., "yyyy-mm-dd", "0.00")
    pub code: String,
}

impl NumberFormat {
    /// Format code of numFmtId 0
    pub const GENERAL: &'static str = "General";

    /// Create a number format
    pub fn new<S: Into<String>>(id: u32, code: S) -> Self {
        Self {
            id,
            code: code.into(),
        }
    }

    /// Check if this format's code denotes a date/time
    pub fn is_date_format(&self) -> bool {
        is_date_format_code(&self.code)
    }
}

/// Format code for a built-in date/time id
pub fn builtin_date_format(id: u32) -> Option<&'static str> {
    BUILTIN_DATE_FORMATS
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .map(|(_, code)| *code)
}

/// Check if `id` is one of the built-in date/time formats
pub fn is_builtin_date_format(id: u32) -> bool {
    builtin_date_format(id).is_some()
}

/// Check if a format code string represents a date/time format
///
/// `General` never is. Otherwise bracketed sections (colors, locales,
/// elapsed-time markers) are dropped and the remainder is searched,
/// case-insensitively, for an unescaped date or time token.
pub fn is_date_format_code(code: &str) -> bool {
    if code.trim().eq_ignore_ascii_case("general") {
        return false;
    }

    let stripped = strip_bracketed(code).to_ascii_lowercase();
    DATE_TOKENS
        .iter()
        .any(|token| contains_unescaped(&stripped, token))
}

/// Drop every `[...]` segment whose brackets are both unescaped. An
/// opening bracket with no closing one is kept as literal text.
fn strip_bracketed(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut rest = code;

    while let Some(open) = find_unescaped(rest, '[') {
        let Some(close) = find_unescaped(&rest[open + 1..], ']') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + 1 + close + 1..];
    }
    out.push_str(rest);

    out
}

fn find_unescaped(haystack: &str, c: char) -> Option<usize> {
    haystack
        .match_indices(c)
        .map(|(i, _)| i)
        .find(|&i| !haystack[..i].ends_with(ESCAPE))
}

fn contains_unescaped(haystack: &str, token: &str) -> bool {
    haystack
        .match_indices(token)
        .any(|(i, _)| !haystack[..i].ends_with(ESCAPE))
}
