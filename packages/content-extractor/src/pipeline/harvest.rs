//! Harvesting of headings, paragraphs and list blocks from a content region.
//!
//! Each group is collected in document order and capped on its own, then the
//! groups are concatenated headings first, paragraphs second, lists last.
//! Document order across groups is not reconstructed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::config::HarvestLimits;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"(?is)<h[12]\b[^>]*>.*?</h[12]\s*>").unwrap();
    static ref PARAGRAPH_OPEN_REGEX: Regex = Regex::new(r"(?i)<p\b[^>]*>").unwrap();
    static ref PARAGRAPH_CLOSE_REGEX: Regex = Regex::new(r"(?i)</p\s*>").unwrap();
    static ref LIST_TAG_REGEX: Regex = Regex::new(r"(?i)<(/?)(?:ul|ol)\b[^>]*>").unwrap();
}

/// Raw markup fragments taken from `region`, in output order.
pub fn harvest<'a>(region: &'a str, limits: &HarvestLimits) -> Vec<&'a str> {
    let mut fragments = headings(region, limits.max_headings);
    fragments.extend(paragraphs(region, limits.max_paragraphs, limits.min_paragraph_lead));
    fragments.extend(lists(region, limits.max_lists));
    fragments
}

/// `<h1>`/`<h2>` elements, outer markup included.
pub fn headings(region: &str, max: usize) -> Vec<&str> {
    HEADING_REGEX
        .find_iter(region)
        .take(max)
        .map(|m| m.as_str())
        .collect()
}

/// `<p>` elements whose opening tag is followed by at least `min_lead`
/// characters of text before the next tag.
///
/// A paragraph runs to the first `</p>` after its lead. When the lead is too
/// short the scan resumes right after that opening tag, so a qualifying
/// paragraph nested in a rejected one is still found.
pub fn paragraphs(region: &str, max: usize, min_lead: usize) -> Vec<&str> {
    let mut found = Vec::new();
    let mut pos = 0;

    while found.len() < max {
        let Some(open) = PARAGRAPH_OPEN_REGEX.find_at(region, pos) else {
            break;
        };

        let body = &region[open.end()..];
        let lead_len = body.find('<').unwrap_or(body.len());
        let lead = &body[..lead_len];

        if lead.chars().count() < min_lead {
            pos = open.end();
            continue;
        }

        match PARAGRAPH_CLOSE_REGEX.find_at(region, open.end() + lead_len) {
            Some(close) => {
                found.push(&region[open.start()..close.end()]);
                pos = close.end();
            }
            // No closing tag anywhere after this point, nothing further can match
            None => break,
        }
    }

    found
}

/// `<ul>`/`<ol>` blocks including nested lists.
///
/// Nesting is tracked by counting list open and close tags. If a block never
/// balances, it ends at the last list close tag seen after it.
pub fn lists(region: &str, max: usize) -> Vec<&str> {
    let mut found = Vec::new();
    let mut pos = 0;

    while found.len() < max {
        let Some(open) = next_list_open(region, pos) else {
            break;
        };

        let mut depth = 1usize;
        let mut balanced_end = None;
        let mut last_close_end = None;

        for cap in LIST_TAG_REGEX.captures_iter(&region[open.1..]) {
            let Some(tag) = cap.get(0) else { continue };
            let tag_end = open.1 + tag.end();

            if is_close_tag(&cap) {
                depth -= 1;
                last_close_end = Some(tag_end);
                if depth == 0 {
                    balanced_end = Some(tag_end);
                    break;
                }
            } else {
                depth += 1;
            }
        }

        match balanced_end.or(last_close_end) {
            Some(end) => {
                found.push(&region[open.0..end]);
                pos = end;
            }
            None => break,
        }
    }

    found
}

/// (start, end) of the next opening list tag at or after `pos`.
fn next_list_open(region: &str, pos: usize) -> Option<(usize, usize)> {
    LIST_TAG_REGEX
        .captures_iter(&region[pos..])
        .find(|cap| !is_close_tag(cap))
        .and_then(|cap| cap.get(0))
        .map(|m| (pos + m.start(), pos + m.end()))
}

fn is_close_tag(cap: &regex::Captures<'_>) -> bool {
    cap.get(1).is_some_and(|slash| !slash.as_str().is_empty())
}
