use dioxus::prelude::*;
use shared_types::{
    pattern_copy_url, BadgeStyle, ExampleDefinition, FormState, GeneratedMarkup, PathChange,
    QueryParamChange, TrustedHtml, ADVERTISED_STYLES,
};
use shared_ui::{BadgeDisplay, BadgeImage, Form, FormRow, OptionSelect, Snippet, SnippetSize};

use super::path_builder::PathBuilder;
use super::query_string_builder::QueryStringBuilder;

/// Lets the user fill in an example's parameters and pick a style, then
/// previews the badge and shows embed snippets for it.
///
/// Owns a single [`FormState`]; the URL, preview source and markup are
/// derived from it on every render.
#[component]
pub fn BadgePreviewForm(example: ExampleDefinition, base_url: String) -> Element {
    let mut state = use_signal(FormState::default);
    let current = state.read().clone();
    let style = current.style;
    let title = example.title.clone();
    let spec = example.example.clone();
    let has_query_params = example.has_query_params();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }

        Form { title,
            PathBuilder {
                pattern: spec.pattern.clone(),
                example_params: spec.named_params.clone(),
                on_change: move |change: PathChange| state.write().apply_path_change(change),
            }
            if has_query_params {
                QueryStringBuilder {
                    example_params: spec.query_params.clone(),
                    on_change: move |change: QueryParamChange| state.write().apply_query_change(change),
                }
            }
            StyleSelect {
                value: style,
                on_change: move |style: BadgeStyle| {
                    tracing::debug!(%style, "style changed");
                    state.write().set_style(style);
                },
            }
            BadgeOutputs { state: current, example, base_url }
        }
    }
}

/// Selector over the advertised badge styles.
#[component]
pub fn StyleSelect(value: BadgeStyle, on_change: EventHandler<BadgeStyle>) -> Element {
    let options = ADVERTISED_STYLES
        .iter()
        .map(|style| (style.as_str().to_string(), style.as_str().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        FormRow { label: "Style",
            OptionSelect {
                value: value.as_str().to_string(),
                options,
                on_change: move |key: String| match key.parse::<BadgeStyle>() {
                    Ok(style) => on_change.call(style),
                    Err(e) => tracing::warn!(error = %e, "ignoring style selection"),
                },
            }
        }
    }
}

/// Everything derived from the form state: preview, snippets, documentation
/// and the full pattern.
#[component]
pub fn BadgeOutputs(state: FormState, example: ExampleDefinition, base_url: String) -> Element {
    let preview_src = state.preview_src(&base_url);
    let badge_url = state.badge_url(&base_url);
    // Alt text comes from the example's display title; `ExampleSpec` carries none.
    let markup = state.markup(&base_url, &example.title);
    let documentation = example
        .documentation
        .map(|html| rsx! { Documentation { html } });
    let pattern = example.example.pattern;

    rsx! {
        LivePreview { src: preview_src }
        MarkupSnippets { badge_url, markup }
        {documentation}
        FullPattern { pattern, base_url }
    }
}

#[component]
fn LivePreview(src: String) -> Element {
    rsx! {
        FormRow { label: "Live preview",
            BadgeImage { src, alt: "badge preview", display: BadgeDisplay::Block }
        }
    }
}

#[component]
fn MarkupSnippets(badge_url: String, markup: GeneratedMarkup) -> Element {
    rsx! {
        div { class: "markup-snippets",
            FormRow { label: "URL",
                Snippet { snippet: badge_url, truncate: true }
            }
            FormRow { label: "Markdown",
                Snippet { snippet: markup.markdown, truncate: true }
            }
            FormRow { label: "reStructuredText",
                Snippet { snippet: markup.restructured_text, truncate: true }
            }
            FormRow { label: "AsciiDoc",
                Snippet { snippet: markup.ascii_doc, truncate: true }
            }
        }
    }
}

/// Example documentation, inserted as HTML without sanitization.
#[component]
fn Documentation(html: TrustedHtml) -> Element {
    rsx! {
        div { class: "badge-documentation",
            h4 { "Documentation" }
            div { dangerous_inner_html: "{html.as_str()}" }
        }
    }
}

#[component]
fn FullPattern(pattern: String, base_url: String) -> Element {
    let copy_value = pattern_copy_url(&base_url, &pattern);
    rsx! {
        FormRow { label: "Pattern",
            Snippet { snippet: pattern, copy_value, size: SnippetSize::ExtraSmall }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use shared_types::{static_badge_url, ExampleSpec, QueryParamValue};
    use std::collections::BTreeMap;
    use std::time::Duration;

    const SHIELDS: &str = "https://img.shields.io/badge";

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Render, then flush effects and the signal writes they cause until the
    /// dom goes idle.
    async fn render_settled(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        for _ in 0..8 {
            let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
        dioxus_ssr::render(&dom)
    }

    fn owner_repo_example() -> ExampleDefinition {
        let mut named_params = BTreeMap::new();
        named_params.insert("owner".to_string(), "badges".to_string());
        named_params.insert("repo".to_string(), "shields".to_string());
        ExampleDefinition {
            title: "GitHub Repo stars".to_string(),
            documentation: None,
            example: ExampleSpec {
                pattern: "/:owner/:repo".to_string(),
                named_params,
                query_params: BTreeMap::new(),
            },
            keywords: vec![],
        }
    }

    fn documented_example() -> ExampleDefinition {
        let mut example = owner_repo_example();
        example.documentation = Some(TrustedHtml::from_trusted(
            "<p>Counts <b>stargazers</b>.</p>",
        ));
        example
            .example
            .query_params
            .insert("label".to_string(), QueryParamValue::Text("stars".to_string()));
        example
    }

    fn complete_state(style: BadgeStyle) -> FormState {
        let mut state = FormState::default();
        state.apply_path_change(PathChange {
            path: "/badges/shields".to_string(),
            is_complete: true,
        });
        state.set_style(style);
        state
    }

    fn placeholder() -> String {
        static_badge_url(SHIELDS, "preview", "some parameters missing", "lightgray")
    }

    #[test]
    fn initial_render_shows_placeholder_preview() {
        let html = render(|| {
            rsx! { BadgePreviewForm { example: owner_repo_example(), base_url: SHIELDS.to_string() } }
        });
        assert!(html.contains("GitHub Repo stars"));
        assert!(html.contains(&format!(r#"src="{}""#, placeholder())));
    }

    #[tokio::test]
    async fn filled_path_drives_preview_and_url_snippet() {
        let html = render_settled(|| {
            rsx! { BadgePreviewForm { example: owner_repo_example(), base_url: SHIELDS.to_string() } }
        })
        .await;
        assert!(html.contains(r#"src="https://img.shields.io/badge/badges/shields""#));
        assert!(html.contains(">https://img.shields.io/badge/badges/shields<"));
        assert!(html.contains("![GitHub Repo stars](https://img.shields.io/badge/badges/shields)"));
        assert!(!html.contains(&placeholder()));
    }

    #[tokio::test]
    async fn missing_path_value_keeps_placeholder_after_effects() {
        let html = render_settled(|| {
            let mut example = owner_repo_example();
            example.example.named_params.remove("repo");
            rsx! { BadgePreviewForm { example, base_url: SHIELDS.to_string() } }
        })
        .await;
        assert!(html.contains(&format!(r#"src="{}""#, placeholder())));
        assert!(html.contains(">https://img.shields.io/badge/badges/:repo<"));
    }

    #[tokio::test]
    async fn query_params_are_kept_out_of_the_badge_url() {
        let html = render_settled(|| {
            rsx! { BadgePreviewForm { example: documented_example(), base_url: SHIELDS.to_string() } }
        })
        .await;
        assert!(html.contains(r#"src="https://img.shields.io/badge/badges/shields""#));
        assert!(!html.contains("label=stars"));
    }

    #[test]
    fn query_section_only_with_query_params() {
        let without = render(|| {
            rsx! { BadgePreviewForm { example: owner_repo_example(), base_url: SHIELDS.to_string() } }
        });
        assert!(!without.contains("query-string-builder"));

        let with = render(|| {
            rsx! { BadgePreviewForm { example: documented_example(), base_url: SHIELDS.to_string() } }
        });
        assert!(with.contains("query-string-builder"));
    }

    #[test]
    fn style_selector_lists_advertised_styles() {
        let html = render(|| {
            rsx! { BadgePreviewForm { example: owner_repo_example(), base_url: SHIELDS.to_string() } }
        });
        for style in ADVERTISED_STYLES {
            assert!(html.contains(&format!(r#"value="{}""#, style.as_str())));
        }
    }

    #[test]
    fn complete_state_previews_badge_url() {
        let html = render(|| {
            rsx! {
                BadgeOutputs {
                    state: complete_state(BadgeStyle::Flat),
                    example: owner_repo_example(),
                    base_url: SHIELDS.to_string(),
                }
            }
        });
        assert!(html.contains(r#"src="https://img.shields.io/badge/badges/shields""#));
        assert!(html.contains(">https://img.shields.io/badge/badges/shields<"));
        assert!(html.contains("![GitHub Repo stars](https://img.shields.io/badge/badges/shields)"));
        assert!(html.contains(".. image:: https://img.shields.io/badge/badges/shields"));
        assert!(!html.contains(&placeholder()));
    }

    #[test]
    fn non_default_style_is_encoded() {
        let html = render(|| {
            rsx! {
                BadgeOutputs {
                    state: complete_state(BadgeStyle::ForTheBadge),
                    example: owner_repo_example(),
                    base_url: SHIELDS.to_string(),
                }
            }
        });
        assert!(html.contains(
            r#"src="https://img.shields.io/badge/badges/shields?style=for-the-badge""#
        ));
    }

    #[test]
    fn incomplete_state_ignores_style_and_path() {
        let html = render(|| {
            let state = FormState {
                path: "/badges/:repo".to_string(),
                style: BadgeStyle::Social,
                ..FormState::default()
            };
            rsx! {
                BadgeOutputs { state, example: owner_repo_example(), base_url: SHIELDS.to_string() }
            }
        });
        assert!(html.contains(&format!(r#"src="{}""#, placeholder())));
    }

    #[test]
    fn documentation_rendered_verbatim_when_present() {
        let html = render(|| {
            rsx! {
                BadgeOutputs {
                    state: FormState::default(),
                    example: documented_example(),
                    base_url: SHIELDS.to_string(),
                }
            }
        });
        assert!(html.contains("Documentation"));
        assert!(html.contains("<p>Counts <b>stargazers</b>.</p>"));

        let bare = render(|| {
            rsx! {
                BadgeOutputs {
                    state: FormState::default(),
                    example: owner_repo_example(),
                    base_url: SHIELDS.to_string(),
                }
            }
        });
        assert!(!bare.contains("Documentation"));
    }

    #[test]
    fn full_pattern_is_shown() {
        let html = render(|| {
            rsx! {
                BadgeOutputs {
                    state: FormState::default(),
                    example: owner_repo_example(),
                    base_url: SHIELDS.to_string(),
                }
            }
        });
        assert!(html.contains(">/:owner/:repo<"));
    }
}
