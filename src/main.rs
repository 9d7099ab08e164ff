use dioxus::prelude::*;

use docs_ui::config::SidebarConfig;
use docs_ui::pages::{DocsPage, Home};
use docs_ui::storage::{BrowserSessionStore, OpenSections};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/docs/:..slug")]
    DocsPage { slug: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SidebarConfig::default);
    use_context_provider(|| OpenSections::with_storage_key(BrowserSessionStore, config.storage_key.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
