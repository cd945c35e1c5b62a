use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path outside the catalog.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "There is no badge page at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::CatalogPage {},
                    class: "not-found-link",
                    "Back to the catalog"
                }
            }
        }
    }
}
