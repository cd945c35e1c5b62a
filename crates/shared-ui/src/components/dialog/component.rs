use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal dialog root. Escape, backdrop clicks and focus trapping come from
/// the primitive; `on_open_change` reports closes.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

/// Title row with a close button.
#[component]
pub fn DialogHeader(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "dialog-header",
            {children}
            button {
                class: "dialog-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                "\u{2715}"
            }
        }
    }
}
