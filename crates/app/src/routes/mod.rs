pub mod catalog;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::AppConfig;

use catalog::CatalogPage;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    CatalogPage {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar plus the routed page.
#[component]
fn AppLayout() -> Element {
    let config: AppConfig = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "app-navbar",
                Link { to: Route::CatalogPage {}, class: "app-brand",
                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                    span { class: "app-brand-name", "Badge builder" }
                }
                span { class: "app-base-url", "{config.base_url}" }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
