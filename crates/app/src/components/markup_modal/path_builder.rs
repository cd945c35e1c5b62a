use dioxus::prelude::*;
use shared_types::{PathChange, PathPattern, PatternParam, PatternToken};
use shared_ui::{OptionSelect, TextField};
use std::collections::BTreeMap;

/// Starting value for every parameter: the example value if there is one.
fn initial_values(
    pattern: &PathPattern,
    example_params: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    pattern
        .params()
        .map(|param| {
            let value = example_params.get(&param.name).cloned().unwrap_or_default();
            (param.name.clone(), value)
        })
        .collect()
}

/// Options for a choice parameter. The leading empty entry lets the user
/// clear the value.
fn choice_options(param: &PatternParam) -> Vec<(String, String)> {
    std::iter::once((String::new(), String::new()))
        .chain(param.choices.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

/// Edits the named parameters of a badge pattern.
///
/// Emits a [`PathChange`] after mount and after every edit.
#[component]
pub fn PathBuilder(
    pattern: String,
    example_params: BTreeMap<String, String>,
    on_change: EventHandler<PathChange>,
) -> Element {
    let parsed = use_hook(|| {
        let parsed = PathPattern::parse(&pattern);
        if let Err(e) = &parsed {
            tracing::warn!(error = %e, "pattern cannot be edited");
        }
        parsed
    });

    let mut values = use_signal(|| match &parsed {
        Ok(p) => initial_values(p, &example_params),
        Err(_) => BTreeMap::new(),
    });

    let for_effect = parsed.clone();
    use_effect(move || {
        let change = match &for_effect {
            Ok(p) => p.construct_path(&values.read()),
            Err(_) => PathChange::default(),
        };
        tracing::debug!(path = %change.path, is_complete = change.is_complete, "path changed");
        on_change.call(change);
    });

    let pattern_tokens = match parsed {
        Ok(p) => p,
        Err(_) => {
            return rsx! {
                div { class: "path-builder",
                    code { class: "path-literal", "{pattern}" }
                }
            };
        }
    };

    let current = values.read().clone();
    let segments = pattern_tokens
        .tokens()
        .iter()
        .enumerate()
        .map(|(i, token)| match token {
            PatternToken::Literal(text) => rsx! {
                span { key: "{i}", class: "path-literal", "{text}" }
            },
            PatternToken::Param(param) => {
                let name = param.name.clone();
                let prefix = param.prefix.clone();
                let value = current.get(&param.name).cloned().unwrap_or_default();
                let label = if param.optional {
                    format!("{} (optional)", param.name)
                } else {
                    param.name.clone()
                };
                let field = if param.choices.is_empty() {
                    rsx! {
                        TextField {
                            label,
                            value,
                            placeholder: param.name.clone(),
                            on_change: move |v: String| {
                                values.write().insert(name.clone(), v);
                            },
                        }
                    }
                } else {
                    rsx! {
                        OptionSelect {
                            label,
                            value,
                            options: choice_options(param),
                            on_change: move |v: String| {
                                values.write().insert(name.clone(), v);
                            },
                        }
                    }
                };
                rsx! {
                    span { key: "{i}", class: "path-param",
                        if !prefix.is_empty() {
                            span { class: "path-literal", "{prefix}" }
                        }
                        {field}
                    }
                }
            }
        });

    rsx! {
        div { class: "path-builder", {segments} }
    }
}
