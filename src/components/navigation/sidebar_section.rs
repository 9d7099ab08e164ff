use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronRight;
use dioxus_free_icons::Icon;

use super::SidebarItem;
use crate::config::child_path;
use crate::hooks::{use_open_sections, use_section_state, use_sidebar_config};
use crate::types::{NavEntries, NavNode, RouteState};
use crate::utils::title_case;

/// One collapsible branch of the navigation tree.
///
/// The header toggles the section; leaves render as [`SidebarItem`]s and
/// branches recurse as nested sections. Content stays in the DOM while
/// collapsed so the active link can always be scrolled to.
#[component]
pub fn SidebarSection(
    value: String,
    index: usize,
    entries: NavEntries,
    route: RouteState,
    #[props(default)] nested: bool,
    #[props(default)] parent_path: String,
) -> Element {
    let config = use_sidebar_config();
    let sections = use_open_sections();

    let persist_key = config.keying.persist_key(&parent_path, &value);
    let in_focus = route.in_focus(&value);
    let mut state = use_section_state(&sections, &persist_key, in_focus);
    let open = state().is_expanded();

    let path = child_path(&parent_path, &value);
    let aliases = if nested {
        Vec::new()
    } else {
        config.aliases_for(&value, &route).to_vec()
    };
    let title = title_case(&value);

    rsx! {
        section {
            class: if nested { "sidebar-section nested" } else { "sidebar-section" },
            div {
                class: if in_focus { "sidebar-section-header in-focus" } else { "sidebar-section-header" },
                aria_expanded: "{open}",
                onclick: move |_| {
                    let next = sections.toggle(&persist_key, *state.peek(), in_focus);
                    state.set(next);
                },
                span {
                    class: if open { "sidebar-chevron open" } else { "sidebar-chevron" },
                    Icon { width: 14, height: 16, icon: FaChevronRight }
                }
                span {
                    class: if open { "sidebar-section-title open" } else { "sidebar-section-title" },
                    "{title}"
                }
            }
            div {
                class: if open { "accordion-content active-acc" } else { "accordion-content" },
                for (child_key, node) in entries.iter() {
                    {
                        match node {
                            NavNode::Leaf(link) => rsx! {
                                SidebarItem {
                                    key: "{child_key}",
                                    link: link.clone(),
                                    route: route.clone(),
                                }
                            },
                            NavNode::Branch(children) => rsx! {
                                SidebarSection {
                                    key: "{child_key}-{index}",
                                    value: child_key.clone(),
                                    index: index,
                                    entries: children.clone(),
                                    route: route.clone(),
                                    nested: true,
                                    parent_path: path.clone(),
                                }
                            },
                        }
                    }
                }
                for link in aliases.iter() {
                    SidebarItem {
                        key: "alias-{link.title}",
                        link: link.clone(),
                        route: route.clone(),
                    }
                }
            }
        }
    }
}
