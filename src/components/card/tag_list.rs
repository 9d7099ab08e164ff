use dioxus::prelude::*;

#[component]
pub fn TagList(tags: Vec<String>) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "tag-list",
            for (index, tag) in tags.iter().enumerate() {
                li {
                    key: "{index}-{tag}",
                    class: "tag-pill",
                    span { class: "tag-pill-text", "{tag}" }
                }
            }
        }
    }
}
