use dioxus::prelude::*;
use tracing::warn;

use crate::components::card::ExampleCard;
use crate::components::navigation::Sidebar;
use crate::types::{ExampleSummary, NavTree, RouteState};
use crate::utils::title_case;

static NAVIGATION_JSON: &str = include_str!("../../assets/navigation.json");
static EXAMPLES_JSON: &str = include_str!("../../assets/examples.json");

fn load_navigation() -> NavTree {
    NavTree::from_json(NAVIGATION_JSON).unwrap_or_else(|err| {
        warn!("navigation tree could not be loaded: {}", err);
        NavTree::default()
    })
}

fn load_examples() -> Vec<ExampleSummary> {
    ExampleSummary::list_from_json(EXAMPLES_JSON).unwrap_or_else(|err| {
        warn!("examples could not be loaded: {}", err);
        Vec::new()
    })
}

#[component]
pub fn Home() -> Element {
    let examples = use_hook(load_examples);

    rsx! {
        main { class: "examples-page",
            header { class: "content-header",
                h2 { "Examples" }
            }
            div { class: "examples-grid",
                for (index, example) in examples.iter().enumerate() {
                    ExampleCard {
                        key: "{index}",
                        title: example.title.clone(),
                        description: example.description.clone(),
                        technologies: example.technologies.clone(),
                        tags: example.tags.clone(),
                    }
                }
            }
        }
    }
}

#[component]
pub fn DocsPage(slug: Vec<String>) -> Element {
    let tree = use_hook(load_navigation);
    let route = RouteState::new(format!("/docs/{}", slug.join("/")), slug.clone());
    let heading = slug
        .last()
        .map(|segment| title_case(segment))
        .unwrap_or_else(|| "Documentation".to_string());

    rsx! {
        div { class: "docs-layout",
            aside { class: "docs-sidebar",
                Sidebar { tree: tree, route: route }
            }
            main { class: "docs-content",
                h2 { "{heading}" }
            }
        }
    }
}
