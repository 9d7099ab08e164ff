use dioxus::prelude::*;

use super::{IconList, TagList};
use crate::types::Technology;

/// A summary card for an example project: heading, description, then a
/// footer row with the technologies it uses and its tags.
#[component]
pub fn ExampleCard(
    title: String,
    description: String,
    #[props(default)] technologies: Vec<Technology>,
    #[props(default = true)] show_icon: bool,
    #[props(default)] tags: Vec<String>,
    #[props(default)] class: String,
) -> Element {
    let class = if class.is_empty() {
        "example-card".to_string()
    } else {
        format!("example-card {class}")
    };

    rsx! {
        div { class: "{class}",
            h6 { class: "example-card-title", "{title}" }
            p { class: "example-card-description", "{description}" }
            hr { class: "example-card-divider" }
            div { class: "example-card-footer",
                IconList { technologies: technologies, show_icon: show_icon }
                TagList { tags: tags }
            }
        }
    }
}
