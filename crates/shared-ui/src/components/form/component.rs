use dioxus::prelude::*;

/// Form wrapper that never submits; builders inside react to input events.
///
/// Renders `title` as the form heading when it is not empty.
#[component]
pub fn Form(
    #[props(default)] title: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            action: "",
            onsubmit: move |evt| evt.prevent_default(),
            ..merged,
            if !title.is_empty() {
                h3 { class: "form-title", "{title}" }
            }
            {children}
        }
    }
}

/// One labelled row of a Form.
#[component]
pub fn FormRow(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        div { class: "form-row",
            if !label.is_empty() {
                span { class: "form-row-label", "{label}" }
            }
            {children}
        }
    }
}
