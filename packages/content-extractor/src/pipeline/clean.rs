//! Flattening of harvested markup into plain text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::config::HarvestLimits;

/// Separator placed between surviving fragments.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip tags, decode `&nbsp;` `&quot;` `&amp;`, collapse whitespace and trim.
///
/// Only those three entities are decoded, and `&amp;` goes last so
/// `&amp;quot;` comes out as `&quot;`.
pub fn clean_fragment(fragment: &str) -> String {
    let text = TAG_REGEX.replace_all(fragment, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}

/// Clean every fragment, drop the short ones, join and truncate.
pub fn assemble<'a, I>(fragments: I, limits: &HarvestLimits) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = fragments
        .into_iter()
        .map(clean_fragment)
        .filter(|text| text.chars().count() > limits.min_fragment_chars)
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR);

    truncate_chars(&joined, limits.max_content_chars)
}

/// First `max` characters of `text`. May cut mid-word.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
