use dioxus::prelude::*;

/// How a badge image sits in the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeDisplay {
    #[default]
    Inline,
    Block,
}

impl BadgeDisplay {
    fn class(&self) -> &'static str {
        match self {
            BadgeDisplay::Inline => "inline",
            BadgeDisplay::Block => "block",
        }
    }
}

/// A badge image loaded from a badge server URL.
///
/// The image is fetched by the webview; this component only supplies `src`.
#[component]
pub fn BadgeImage(
    src: String,
    #[props(default)] alt: String,
    #[props(default)] display: BadgeDisplay,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge-image", None, false),
        Attribute::new("data-display", display.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        img {
            src: "{src}",
            alt: "{alt}",
            ..merged,
        }
    }
}
