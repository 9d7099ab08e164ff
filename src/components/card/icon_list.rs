use dioxus::prelude::*;

use super::TechnologyIcon;
use crate::types::Technology;

/// What the icon area of a card shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconLayout {
    Hidden,
    /// A single technology: icon plus its name.
    Labelled(Technology),
    /// Several technologies: bare icons in input order, duplicates kept.
    IconsOnly(Vec<Technology>),
}

impl IconLayout {
    pub fn resolve(technologies: &[Technology], show_icon: bool) -> Self {
        match technologies {
            _ if !show_icon => IconLayout::Hidden,
            [] => IconLayout::Hidden,
            [technology] => IconLayout::Labelled(*technology),
            many => IconLayout::IconsOnly(many.to_vec()),
        }
    }
}

#[component]
pub fn IconList(technologies: Vec<Technology>, show_icon: bool) -> Element {
    match IconLayout::resolve(&technologies, show_icon) {
        IconLayout::Hidden => rsx! {},
        IconLayout::Labelled(technology) => rsx! {
            div { class: "icon-list icon-list-labelled",
                TechnologyIcon { technology: technology }
                span { class: "icon-list-label", "{technology.name()}" }
            }
        },
        IconLayout::IconsOnly(technologies) => rsx! {
            ul { class: "icon-list",
                for (index, technology) in technologies.into_iter().enumerate() {
                    li {
                        key: "{index}-{technology.id()}",
                        class: "icon-list-item",
                        TechnologyIcon { technology: technology }
                    }
                }
            }
        },
    }
}
