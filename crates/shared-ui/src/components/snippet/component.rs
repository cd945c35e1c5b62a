use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCopy;
use dioxus_free_icons::Icon;

/// Font size of a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnippetSize {
    #[default]
    Small,
    ExtraSmall,
}

impl SnippetSize {
    fn class(&self) -> &'static str {
        match self {
            SnippetSize::Small => "sm",
            SnippetSize::ExtraSmall => "xs",
        }
    }
}

/// Write `text` to the system clipboard from the webview.
pub fn copy_to_clipboard(text: &str) {
    match serde_json::to_string(text) {
        Ok(literal) => {
            document::eval(&format!("navigator.clipboard.writeText({literal});"));
        }
        Err(e) => tracing::warn!("clipboard copy skipped: {e}"),
    }
}

/// A one-line code snippet with a copy button.
///
/// `copy_value` overrides what lands on the clipboard when it differs from
/// the displayed text.
#[component]
pub fn Snippet(
    snippet: String,
    #[props(default)] copy_value: Option<String>,
    #[props(default = false)] truncate: bool,
    #[props(default)] size: SnippetSize,
) -> Element {
    let mut copied = use_signal(|| false);
    let to_copy = copy_value.unwrap_or_else(|| snippet.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "snippet",
            "data-size": size.class(),
            "data-truncate": if truncate { "true" } else { "false" },
            code { class: "snippet-code", "{snippet}" }
            button {
                class: "snippet-copy",
                r#type: "button",
                title: "Copy to clipboard",
                onclick: move |_| {
                    copy_to_clipboard(&to_copy);
                    copied.set(true);
                },
                Icon::<FaCopy> { icon: FaCopy, width: 12, height: 12 }
                if copied() {
                    span { class: "snippet-copied", "Copied" }
                }
            }
        }
    }
}
