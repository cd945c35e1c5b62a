use dioxus::prelude::*;

mod catalog;
mod components;
mod config;
mod routes;

use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let loaded = config::load_config();
    let level = match &loaded {
        Ok(cfg) => config::log_level(&cfg.log_level),
        Err(_) => tracing::Level::INFO,
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("failed to initialise logger: {e}");
    }

    let cfg = loaded.unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid configuration, using defaults");
        Default::default()
    });
    tracing::info!(base_url = %cfg.base_url, "starting badge builder");
    config::install(cfg);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(config::app_config);
    use_context_provider(catalog::load_catalog);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
