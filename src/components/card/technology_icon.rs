use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaAndroid, FaApple, FaJs, FaReact};
use dioxus_free_icons::icons::fa_solid_icons::{FaMobile, FaServer};
use dioxus_free_icons::Icon;

use crate::types::Technology;

/// Icon for a technology. Every [`Technology`] has exactly one shape, so
/// lookup cannot fail.
#[component]
pub fn TechnologyIcon(technology: Technology, #[props(default = 20)] size: u32) -> Element {
    let icon = match technology {
        Technology::JavaScript => rsx! { Icon { width: size, height: size, icon: FaJs } },
        Technology::React | Technology::ReactNative => {
            rsx! { Icon { width: size, height: size, icon: FaReact } }
        }
        Technology::Android => rsx! { Icon { width: size, height: size, icon: FaAndroid } },
        Technology::Ios => rsx! { Icon { width: size, height: size, icon: FaApple } },
        Technology::Flutter => rsx! { Icon { width: size, height: size, icon: FaMobile } },
        Technology::ServerSide => rsx! { Icon { width: size, height: size, icon: FaServer } },
    };

    rsx! {
        span {
            class: "technology-icon technology-icon-{technology.id()}",
            title: "{technology.name()}",
            {icon}
        }
    }
}
