//! Short page label derived from `<title>`.

use lazy_static::lazy_static;
use regex::Regex;

/// Label used when a page has no usable `<title>`.
pub const DEFAULT_TITLE: &str = "Content";

/// Separators replaced with a space before the first word is taken: pipe,
/// hyphen, en-dash and em-dash.
///
/// `â`, `€` and `“` are what an en-dash looks like after UTF-8 bytes were
/// decoded as Windows-1252 upstream. They are matched as-is; the text is never
/// re-decoded.
const TITLE_SEPARATORS: &[char] = &[
    '|', '-', '\u{2013}', '\u{2014}', '\u{00E2}', '\u{20AC}', '\u{201C}',
];

lazy_static! {
    static ref TITLE_REGEX: Regex = Regex::new(r"(?i)<title\b[^>]*>([^<]+)</title\s*>").unwrap();
}

/// First word of the document's first `<title>`, or [`DEFAULT_TITLE`].
pub fn derive_title(html: &str) -> String {
    TITLE_REGEX
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().replace(TITLE_SEPARATORS, " "))
        .and_then(|text| text.split_whitespace().next().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
