//! Markup stripping for free-text fields.

use scraper::Html;

/// Strip all tags from `raw_html`, keeping one text node per line.
///
/// Entities are decoded and whitespace-only nodes between blocks are
/// dropped, so `<p>a</p>\n<p>b</p>` becomes `"a\nb"`. Malformed markup never
/// fails; the parser recovers whatever text it can.
pub fn clean(raw_html: &str) -> String {
    let fragment = Html::parse_fragment(raw_html);

    fragment
        .root_element()
        .text()
        .filter(|node| !node.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
