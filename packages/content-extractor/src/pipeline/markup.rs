//! Removal of non-content markup and main-region narrowing.
//!
//! Matching is regex based, non-greedy and case-insensitive. Nested or
//! malformed markup may be over- or under-stripped.

use lazy_static::lazy_static;
use regex::Regex;

/// Elements removed together with everything inside them.
pub const NON_CONTENT_TAGS: [&str; 7] = [
    "script", "style", "nav", "header", "footer", "aside", "button",
];

lazy_static! {
    static ref NON_CONTENT_REGEXES: Vec<Regex> = NON_CONTENT_TAGS
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).unwrap())
        .collect();
    static ref MAIN_REGEX: Regex = Regex::new(r"(?is)<main\b[^>]*>(.*?)</main\s*>").unwrap();
    static ref ARTICLE_REGEX: Regex =
        Regex::new(r"(?is)<article\b[^>]*>(.*?)</article\s*>").unwrap();
}

/// Remove every [`NON_CONTENT_TAGS`] element, contents included.
pub fn strip_non_content(html: &str) -> String {
    let mut text = html.to_string();
    for pattern in NON_CONTENT_REGEXES.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }
    text
}

/// Inner markup of the first `<main>`, else the first `<article>`, else all of `html`.
pub fn main_region(html: &str) -> &str {
    MAIN_REGEX
        .captures(html)
        .or_else(|| ARTICLE_REGEX.captures(html))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_each_non_content_element() {
        let html = r#"<script type="text/javascript">var x = "<p>";</script>
<STYLE>p { color: red }</STYLE>
<nav class="top"><a href="/">Home</a></nav>
<header><h1>Site name</h1></header>
<p>kept</p>
<aside>Related links</aside>
<button onclick="go()">Click me</button>
<footer>Copyright</footer>"#;

        let stripped = strip_non_content(html);
        assert!(stripped.contains("<p>kept</p>"));
        for gone in ["var x", "color", "Home", "Site name", "Related", "Click me", "Copyright"] {
            assert!(!stripped.contains(gone), "{gone} should have been stripped");
        }
    }

    #[test]
    fn test_strip_is_non_greedy() {
        let html = "<aside>one</aside><p>between</p><aside>two</aside>";
        assert_eq!(strip_non_content(html), "<p>between</p>");
    }

    #[test]
    fn test_head_is_not_mistaken_for_header() {
        let html = "<head><title>T</title></head><p>body</p>";
        assert_eq!(strip_non_content(html), html);
    }

    #[test]
    fn test_main_preferred_over_article() {
        let html = "<article>article text</article><main class=\"m\">main text</main>";
        assert_eq!(main_region(html), "main text");
    }

    #[test]
    fn test_article_used_without_main() {
        let html = "<div><ARTICLE id=\"a\">article text</ARTICLE></div>";
        assert_eq!(main_region(html), "article text");
    }

    #[test]
    fn test_falls_back_to_whole_document() {
        let html = "<div><p>no landmarks here</p></div>";
        assert_eq!(main_region(html), html);
    }

    #[test]
    fn test_first_main_wins() {
        let html = "<main>first</main><main>second</main>";
        assert_eq!(main_region(html), "first");
    }
}
