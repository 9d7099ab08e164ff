use dioxus::prelude::*;

use crate::scroll::ACTIVE_ITEM_ID;
use crate::types::{NavLink, RouteState};

/// A leaf link. The link of the current page is highlighted and tagged
/// as the scroll target.
#[component]
pub fn SidebarItem(link: NavLink, route: RouteState) -> Element {
    let active = route.is_active(&link.url);

    rsx! {
        a {
            id: if active { ACTIVE_ITEM_ID },
            class: if active { "sidebar-item active" } else { "sidebar-item" },
            aria_current: if active { "page" },
            href: "{link.url}",
            "{link.title}"
        }
    }
}
