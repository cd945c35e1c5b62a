use dioxus::prelude::*;
use dioxus_primitives::checkbox::{self, CheckboxState};

/// Labelled single-line text input that reports its value on every keystroke.
#[component]
pub fn TextField(
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] on_change: EventHandler<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            if !label.is_empty() {
                span { class: "field-label", "{label}" }
            }
            input {
                r#type: "text",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_change.call(evt.value()),
                ..merged,
            }
        }
    }
}

/// Labelled checkbox for present/absent options.
///
/// `checked` seeds the primitive; later changes arrive through `on_change`.
#[component]
pub fn CheckField(
    #[props(default)] label: String,
    #[props(default = false)] checked: bool,
    #[props(default)] on_change: EventHandler<bool>,
) -> Element {
    let initial = if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field field-check",
            checkbox::Checkbox {
                attributes: vec![Attribute::new("class", "field-checkbox", None, false)],
                default_checked: initial,
                on_checked_change: move |state: CheckboxState| {
                    on_change.call(matches!(state, CheckboxState::Checked));
                },
                checkbox::CheckboxIndicator {
                    attributes: vec![Attribute::new("class", "field-checkbox-indicator", None, false)],
                    "\u{2713}"
                }
            }
            if !label.is_empty() {
                span { class: "field-label", "{label}" }
            }
        }
    }
}

/// Native `<select>` over `(value, label)` pairs.
///
/// Reports the selected value string on change.
#[component]
pub fn OptionSelect(
    #[props(default)] label: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] on_change: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            if !label.is_empty() {
                span { class: "field-label", "{label}" }
            }
            select {
                class: "field-select",
                value: value.clone(),
                onchange: move |evt| on_change.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
