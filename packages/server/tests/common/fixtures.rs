//! HTML fixtures.

/// The canonical small page: one heading and one long paragraph inside `<main>`.
///
/// "Sleep Tips" is exactly 10 characters, so only the paragraph survives.
pub const SLEEP_PAGE: &str = "<html><title>Sleep Better Today</title><body><main><h1>Sleep Tips</h1><p>Getting consistent, high-quality sleep is essential for long-term health and daily functioning.</p></main></body></html>";

pub const SLEEP_PARAGRAPH: &str =
    "Getting consistent, high-quality sleep is essential for long-term health and daily functioning.";

/// Paragraph first, heading last, both long enough to survive.
pub const GUIDE_PAGE: &str = "<html><head><title>Sleep disorders | NICE</title></head><body><article><p>Offer cognitive behavioural therapy for insomnia as first-line treatment.</p><h2>Recommendations</h2></article></body></html>";

pub const GUIDE_CONTENT: &str = "Recommendations\n\nOffer cognitive behavioural therapy for insomnia as first-line treatment.";

/// A guidance-style page with site chrome, groups out of order and more
/// elements than the harvest caps allow.
pub fn crowded_page() -> String {
    let mut body = String::new();

    for i in 1..=5 {
        body.push_str(&format!(
            "<ul>\n<li>List block {i} first recommendation</li>\n<li>second point</li>\n</ul>\n"
        ));
    }
    for i in 1..=20 {
        body.push_str(&format!(
            "<p>Paragraph {i:02} explains one recommendation from the guideline in detail.</p>\n"
        ));
    }
    for i in 1..=8 {
        body.push_str(&format!("<h2 id=\"s{i}\">Section heading {i}</h2>\n"));
    }
    body.push_str("<p>Tiny</p><h1>Short</h1>\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Overview | Sleep disorders | Guidance | NICE</title>
  <style>.hidden {{ display: none }}</style>
  <script>window.dataLayer = [];</script>
</head>
<body>
  <header><h1>NICE site header</h1></header>
  <nav><ul><li>Home navigation link</li></ul></nav>
  <main id="content">
{body}
    <button type="button">Download this guideline as PDF</button>
  </main>
  <aside><p>Related guidance that lives outside the main region entirely.</p></aside>
  <footer><p>Footer text that should never be part of the extracted content.</p></footer>
</body>
</html>"#
    )
}

/// A page whose text alone is far beyond the content cap.
pub fn oversized_page() -> String {
    let paragraph = format!("<p>{}</p>", "Regular physical activity lowers stress. ".repeat(40));
    format!(
        "<html><title>Activity</title><article>{}</article></html>",
        paragraph.repeat(15)
    )
}
