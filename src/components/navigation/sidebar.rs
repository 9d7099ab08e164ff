use dioxus::prelude::*;

use super::{SidebarItem, SidebarSection};
use crate::scroll::scroll_active_item_after_paint;
use crate::types::{NavNode, NavTree, RouteState};

/// Root of the documentation navigation.
///
/// Owns the post-render hook: after each navigation the active link is
/// scrolled to the middle of the sidebar once layout has settled.
#[component]
pub fn Sidebar(tree: NavTree, route: RouteState) -> Element {
    use_effect(use_reactive((&route.as_path,), |(as_path,)| {
        tracing::debug!(path = %as_path, "sidebar rendered, scheduling scroll to active item");
        scroll_active_item_after_paint();
    }));

    rsx! {
        nav { class: "sidebar-nav",
            for (index, (key, node)) in tree.entries().iter().enumerate() {
                {
                    match node {
                        NavNode::Branch(entries) => rsx! {
                            SidebarSection {
                                key: "{key}-{index}",
                                value: key.clone(),
                                index: index,
                                entries: entries.clone(),
                                route: route.clone(),
                            }
                        },
                        NavNode::Leaf(link) => rsx! {
                            SidebarItem {
                                key: "{key}",
                                link: link.clone(),
                                route: route.clone(),
                            }
                        },
                    }
                }
            }
        }
    }
}
