use dioxus::prelude::*;
use shared_types::{build_query_params, QueryParamChange, QueryParamValue};
use shared_ui::{CheckField, TextField};
use std::collections::BTreeMap;

/// Edits the optional query parameters of a badge, pre-filled from the
/// example. Emits a [`QueryParamChange`] after mount and after every edit.
#[component]
pub fn QueryStringBuilder(
    example_params: BTreeMap<String, QueryParamValue>,
    on_change: EventHandler<QueryParamChange>,
) -> Element {
    let mut values = use_signal(|| example_params.clone());

    use_effect(move || {
        let query_params = build_query_params(&values.read());
        tracing::debug!(count = query_params.len(), "query params changed");
        on_change.call(QueryParamChange { query_params });
    });

    let current = values.read().clone();
    let rows = current.into_iter().map(|(name, value)| {
        let key = name.clone();
        let label = name.clone();
        let field = match value {
            QueryParamValue::Text(text) => rsx! {
                TextField {
                    label,
                    value: text,
                    on_change: move |v: String| {
                        values.write().insert(name.clone(), QueryParamValue::Text(v));
                    },
                }
            },
            QueryParamValue::Flag(checked) => rsx! {
                CheckField {
                    label,
                    checked,
                    on_change: move |c: bool| {
                        values.write().insert(name.clone(), QueryParamValue::Flag(c));
                    },
                }
            },
        };
        rsx! {
            div { key: "{key}", class: "query-param", {field} }
        }
    });

    rsx! {
        div { class: "query-string-builder", {rows} }
    }
}
