use crate::query::{to_query_string, QueryParams};
use crate::style::BadgeStyle;

/// Escape one field of a static badge path.
///
/// The badge server splits static badge paths on single dashes and renders
/// single underscores as spaces, so literal `-` and `_` are doubled before
/// percent-encoding.
pub fn encode_field(s: &str) -> String {
    let escaped = s.replace('-', "--").replace('_', "__");
    urlencoding::encode(&escaped).into_owned()
}

/// URL of a static badge showing `label` and `message` on a `color` background.
pub fn static_badge_url(base_url: &str, label: &str, message: &str, color: &str) -> String {
    let path = [label, message, color]
        .iter()
        .map(|field| encode_field(field))
        .collect::<Vec<_>>()
        .join("-");
    format!("{base_url}/badge/{path}")
}

/// URL of a badge served at `path` below `base_url`.
///
/// Pass `None` for the default style so the parameter is left out.
pub fn badge_url_from_path(base_url: &str, path: &str, style: Option<BadgeStyle>) -> String {
    BadgeUrl::new(base_url, path).style(style).build()
}

/// Builder for badge URLs with optional style and output format.
#[derive(Debug, Clone)]
pub struct BadgeUrl<'a> {
    base_url: &'a str,
    path: &'a str,
    style: Option<BadgeStyle>,
    format: Option<&'a str>,
}

impl<'a> BadgeUrl<'a> {
    pub fn new(base_url: &'a str, path: &'a str) -> Self {
        Self {
            base_url,
            path,
            style: None,
            format: None,
        }
    }

    pub fn style(mut self, style: Option<BadgeStyle>) -> Self {
        self.style = style;
        self
    }

    /// Output extension without the dot, e.g. `"svg"`. Empty means none.
    pub fn format(mut self, format: &'a str) -> Self {
        self.format = Some(format);
        self
    }

    pub fn build(&self) -> String {
        let mut params = QueryParams::new();
        if let Some(style) = self.style {
            params.insert("style".to_string(), style.as_str().to_string());
        }

        let mut url = format!("{}{}", self.base_url, self.path);
        if let Some(format) = self.format.filter(|f| !f.is_empty()) {
            url.push('.');
            url.push_str(format);
        }
        let query = to_query_string(&params);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ADVERTISED_STYLES;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://img.shields.io";

    #[test]
    fn encode_field_doubles_dashes_and_underscores() {
        assert_eq!(encode_field("build-status"), "build--status");
        assert_eq!(encode_field("snake_case"), "snake__case");
        assert_eq!(encode_field("plain"), "plain");
    }

    #[test]
    fn encode_field_percent_encodes_spaces_and_reserved() {
        assert_eq!(encode_field("some parameters missing"), "some%20parameters%20missing");
        assert_eq!(encode_field("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_field("100%"), "100%25");
    }

    #[test]
    fn static_badge_placeholder() {
        assert_eq!(
            static_badge_url(BASE, "preview", "some parameters missing", "lightgray"),
            "https://img.shields.io/badge/preview-some%20parameters%20missing-lightgray"
        );
    }

    #[test]
    fn badge_url_from_path_without_style() {
        assert_eq!(
            badge_url_from_path("https://img.shields.io/badge", "/badges/shields", None),
            "https://img.shields.io/badge/badges/shields"
        );
    }

    #[test]
    fn badge_url_from_path_encodes_every_non_default_style() {
        for style in ADVERTISED_STYLES.iter().filter(|s| !s.is_default()) {
            let url = badge_url_from_path(BASE, "/github/stars/badges/shields", style.url_param());
            assert_eq!(
                url,
                format!(
                    "https://img.shields.io/github/stars/badges/shields?style={}",
                    style.as_str()
                )
            );
        }
        let flat = badge_url_from_path(BASE, "/x", BadgeStyle::Flat.url_param());
        assert!(!flat.contains("style="));
    }

    #[test]
    fn builder_appends_format_before_style() {
        let url = BadgeUrl::new(BASE, "/github/stars/badges/shields")
            .style(Some(BadgeStyle::Social))
            .format("svg")
            .build();
        assert_eq!(
            url,
            "https://img.shields.io/github/stars/badges/shields.svg?style=social"
        );
    }

    #[test]
    fn empty_format_adds_no_extension() {
        assert_eq!(BadgeUrl::new(BASE, "/a").format("").build(), "https://img.shields.io/a");
    }
}
