use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCode;
use dioxus_free_icons::Icon;
use shared_types::{badge_url_from_path, AppConfig, Catalog, ExampleDefinition};
use shared_ui::{BadgeImage, DialogContent, DialogHeader, DialogRoot, DialogTitle, TextField};

use crate::components::markup_modal::BadgePreviewForm;

/// Examples of one category that survive the current search.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    /// `(service name, example)` pairs in catalog order.
    pub items: Vec<(String, ExampleDefinition)>,
}

/// Group search hits by category, keeping catalog order and dropping empty
/// categories.
pub fn group_entries(catalog: &Catalog, query: &str) -> Vec<CategoryGroup> {
    let hits = catalog.search(query);
    catalog
        .categories()
        .into_iter()
        .filter_map(|category| {
            let items: Vec<_> = hits
                .iter()
                .filter(|entry| entry.service.category == category)
                .map(|entry| (entry.service.name.clone(), entry.example.clone()))
                .collect();
            (!items.is_empty()).then(|| CategoryGroup {
                category: category.to_string(),
                items,
            })
        })
        .collect()
}

/// Searchable list of every example badge; opening one shows its markup form.
#[component]
pub fn CatalogPage() -> Element {
    let catalog: Catalog = use_context();
    let config: AppConfig = use_context();
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<ExampleDefinition>);

    let groups = group_entries(&catalog, &query.read());
    let base_url = config.base_url.clone();

    // The form only exists while an example is selected, so closing the
    // dialog drops its state.
    let dialog_body = match selected() {
        Some(example) => rsx! {
            DialogHeader { on_close: move |_| selected.set(None),
                DialogTitle { "Get markup" }
            }
            BadgePreviewForm {
                key: "{example.title}",
                example,
                base_url: config.base_url.clone(),
            }
        },
        None => rsx! {},
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./catalog.css") }

        div { class: "catalog-page",
            header { class: "catalog-header",
                h1 { class: "catalog-title", "Badges" }
                TextField {
                    value: query(),
                    placeholder: "Search by name, category or keyword",
                    on_change: move |v: String| query.set(v),
                }
            }

            if groups.is_empty() {
                p { class: "catalog-empty", "No badges match \"{query}\"." }
            }

            for group in groups {
                section { key: "{group.category}", class: "catalog-category",
                    h2 { class: "catalog-category-title", "{group.category}" }
                    div { class: "catalog-grid",
                        for (service, example) in group.items {
                            ExampleCard {
                                key: "{service}-{example.title}",
                                service,
                                example,
                                base_url: base_url.clone(),
                                on_open: move |example: ExampleDefinition| {
                                    tracing::debug!(title = %example.title, "opening markup form");
                                    selected.set(Some(example));
                                },
                            }
                        }
                    }
                }
            }
        }

        DialogRoot {
            open: selected.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    selected.set(None);
                }
            },
            DialogContent { {dialog_body} }
        }
    }
}

/// Card showing one example badge with its service and a button that opens
/// the markup form.
#[component]
fn ExampleCard(
    service: String,
    example: ExampleDefinition,
    base_url: String,
    on_open: EventHandler<ExampleDefinition>,
) -> Element {
    let preview = match example.example_path() {
        Ok(path) => rsx! {
            BadgeImage { src: badge_url_from_path(&base_url, &path, None), alt: example.title.clone() }
        },
        Err(_) => rsx! {
            code { class: "catalog-pattern", "{example.example.pattern}" }
        },
    };
    let title = example.title.clone();

    rsx! {
        div { class: "catalog-card",
            div { class: "catalog-card-title", "{title}" }
            div { class: "catalog-card-service", "{service}" }
            div { class: "catalog-card-preview", {preview} }
            button {
                class: "catalog-card-open",
                r#type: "button",
                onclick: move |_| on_open.call(example.clone()),
                Icon::<LdCode> { icon: LdCode, width: 14, height: 14 }
                "Get markup"
            }
        }
    }
}
