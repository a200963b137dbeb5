//! Visible-text extraction from HTML.
//!
//! The document is parsed with `scraper` (html5ever underneath), so broken
//! markup is recovered the way a browser would recover it. Subtrees rooted at
//! an excluded element are skipped entirely; every other text node is joined
//! with a single space, and whitespace runs are collapsed.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Elements whose text never reaches a reader.
pub const DEFAULT_EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "svg", "noscript", "head"];

fn is_excluded(name: &str, excluded: &[String]) -> bool {
    excluded.iter().any(|e| e.eq_ignore_ascii_case(name))
}

fn append_visible_text(element: &ElementRef, excluded: &[String], out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text.as_ref());
                out.push(' ');
            }
            Node::Element(data) => {
                if is_excluded(data.name(), excluded) {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    append_visible_text(&child_el, excluded, out);
                }
            }
            _ => {}
        }
    }
}

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Return the normalized visible text of an HTML document.
pub fn visible_text(html: &str, excluded: &[String]) -> String {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let mut raw = String::with_capacity(html.len() / 2);
    if !is_excluded(root.value().name(), excluded) {
        append_visible_text(&root, excluded, &mut raw);
    }
    normalize_whitespace(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_EXCLUDED_ELEMENTS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_non_content_elements() {
        let html = r#"<!DOCTYPE html>
<html>
<head><title>Hidden title</title><style>body { color: red; }</style></head>
<body>
  <script>var hidden = "nope";</script>
  <h1>Welcome</h1>
  <svg viewBox="0 0 36 36"><text>arch</text></svg>
  <noscript>Enable scripts</noscript>
  <p>The cat   sat.</p>
</body>
</html>"#;
        assert_eq!(visible_text(html, &defaults()), "Welcome The cat sat.");
    }

    #[test]
    fn adjacent_text_nodes_are_separated() {
        let html = "<p>foo<b>bar</b>baz</p>";
        assert_eq!(visible_text(html, &defaults()), "foo bar baz");
    }

    #[test]
    fn comments_are_not_text() {
        let html = "<p>kept<!-- dropped --></p>";
        assert_eq!(visible_text(html, &defaults()), "kept");
    }

    #[test]
    fn exclusion_is_case_insensitive() {
        let excluded = vec!["NAV".to_string()];
        let html = "<nav>Home About</nav><main>Body text</main>";
        assert_eq!(visible_text(html, &excluded), "Body text");
    }

    #[test]
    fn custom_exclusions_replace_defaults() {
        let html = "<head><title>Shown</title></head><body><footer>gone</footer>here</body>";
        let excluded = vec!["footer".to_string()];
        assert_eq!(visible_text(html, &excluded), "Shown here");
    }

    #[test]
    fn entities_are_decoded() {
        let html = "<p>Stone &amp; mortar&nbsp;work</p>";
        assert_eq!(visible_text(html, &defaults()), "Stone & mortar work");
    }

    #[test]
    fn empty_document() {
        assert_eq!(visible_text("", &defaults()), "");
    }

    #[test]
    fn normalize_collapses_all_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\n\tb  c "), "a b c");
    }
}
