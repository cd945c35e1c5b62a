//! Embed snippets for a badge image in the common documentation markups.

use serde::{Deserialize, Serialize};

/// The three markup renderings of one badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMarkup {
    pub markdown: String,
    pub restructured_text: String,
    pub ascii_doc: String,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

pub fn markdown(badge_url: &str, link: Option<&str>, title: Option<&str>) -> String {
    let image = format!("![{}]({badge_url})", title.unwrap_or_default());
    match non_empty(link) {
        Some(link) => format!("[{image}]({link})"),
        None => image,
    }
}

pub fn restructured_text(badge_url: &str, link: Option<&str>, title: Option<&str>) -> String {
    let mut result = format!(".. image:: {badge_url}");
    if let Some(title) = non_empty(title) {
        result.push_str(&format!("\n   :alt: {title}"));
    }
    if let Some(link) = non_empty(link) {
        result.push_str(&format!("\n   :target: {link}"));
    }
    result
}

fn quote_ascii_doc_attribute(attr: &str) -> String {
    format!("\"{}\"", attr.replace('"', "\\\""))
}

/// Render an AsciiDoc attribute list such as `[title,link="..."]`.
///
/// Values are quoted only when needed: a positional value with a comma, or
/// the presence of any named attribute.
pub fn ascii_doc_attributes(positional: &[&str], named: &[(&str, &str)]) -> String {
    let needs_quoting = positional.iter().any(|attr| attr.contains(',')) || !named.is_empty();

    let mut items: Vec<String> = positional
        .iter()
        .map(|attr| {
            if needs_quoting {
                quote_ascii_doc_attribute(attr)
            } else {
                attr.to_string()
            }
        })
        .collect();
    items.extend(
        named
            .iter()
            .map(|(key, value)| format!("{key}={}", quote_ascii_doc_attribute(value))),
    );

    format!("[{}]", items.join(","))
}

pub fn ascii_doc(badge_url: &str, link: Option<&str>, title: Option<&str>) -> String {
    let positional: Vec<&str> = non_empty(title).into_iter().collect();
    let named: Vec<(&str, &str)> = non_empty(link).map(|link| ("link", link)).into_iter().collect();
    format!("image:{badge_url}{}", ascii_doc_attributes(&positional, &named))
}

/// Render all three markups for one badge.
pub fn generate_all_markup(
    badge_url: &str,
    link: Option<&str>,
    title: Option<&str>,
) -> GeneratedMarkup {
    GeneratedMarkup {
        markdown: markdown(badge_url, link, title),
        restructured_text: restructured_text(badge_url, link, title),
        ascii_doc: ascii_doc(badge_url, link, title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const URL: &str = "https://img.shields.io/github/stars/badges/shields";

    #[test]
    fn markdown_with_and_without_link() {
        assert_eq!(
            markdown(URL, None, Some("GitHub stars")),
            "![GitHub stars](https://img.shields.io/github/stars/badges/shields)"
        );
        assert_eq!(
            markdown(URL, Some("https://github.com/badges/shields"), Some("GitHub stars")),
            "[![GitHub stars](https://img.shields.io/github/stars/badges/shields)](https://github.com/badges/shields)"
        );
        assert_eq!(markdown(URL, Some(""), None), format!("![]({URL})"));
    }

    #[test]
    fn restructured_text_options() {
        assert_eq!(restructured_text(URL, None, None), format!(".. image:: {URL}"));
        assert_eq!(
            restructured_text(URL, Some("https://example.com"), Some("Stars")),
            format!(".. image:: {URL}\n   :alt: Stars\n   :target: https://example.com")
        );
    }

    #[test]
    fn ascii_doc_without_quoting() {
        assert_eq!(ascii_doc(URL, None, None), format!("image:{URL}[]"));
        assert_eq!(ascii_doc(URL, None, Some("Stars")), format!("image:{URL}[Stars]"));
    }

    #[test]
    fn ascii_doc_quotes_when_link_present() {
        assert_eq!(
            ascii_doc(URL, Some("https://example.com"), Some("Stars")),
            format!("image:{URL}[\"Stars\",link=\"https://example.com\"]")
        );
        assert_eq!(
            ascii_doc(URL, Some("https://example.com"), None),
            format!("image:{URL}[link=\"https://example.com\"]")
        );
    }

    #[test]
    fn ascii_doc_quotes_commas_and_escapes_quotes() {
        assert_eq!(
            ascii_doc(URL, None, Some("Stars, forks")),
            format!("image:{URL}[\"Stars, forks\"]")
        );
        assert_eq!(
            ascii_doc_attributes(&["say \"hi\", twice"], &[]),
            "[\"say \\\"hi\\\", twice\"]"
        );
    }

    #[test]
    fn generate_all_markup_is_deterministic() {
        let first = generate_all_markup(URL, None, Some("Stars"));
        let second = generate_all_markup(URL, None, Some("Stars"));
        assert_eq!(first, second);
        assert_eq!(first.markdown, markdown(URL, None, Some("Stars")));
        assert_eq!(first.restructured_text, restructured_text(URL, None, Some("Stars")));
        assert_eq!(first.ascii_doc, ascii_doc(URL, None, Some("Stars")));
    }
}
