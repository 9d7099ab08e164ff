use dioxus::prelude::*;

use crate::config::SidebarConfig;
use crate::storage::{BrowserSessionStore, OpenSections, SectionState};

/// Sidebar configuration from context, or the defaults.
pub fn use_sidebar_config() -> SidebarConfig {
    use_hook(|| try_consume_context::<SidebarConfig>().unwrap_or_default())
}

/// The injected open-sections store, falling back to the browser's
/// session storage when the host did not provide one.
pub fn use_open_sections() -> OpenSections {
    let config = use_sidebar_config();
    use_hook(move || {
        try_consume_context::<OpenSections>()
            .unwrap_or_else(|| OpenSections::with_storage_key(BrowserSessionStore, config.storage_key))
    })
}

/// Open/closed state of a section, resolved once on mount.
///
/// A section that mounts expanded (deep link or earlier click) is recorded
/// in the persisted list straight away.
pub fn use_section_state(sections: &OpenSections, persist_key: &str, in_focus: bool) -> Signal<SectionState> {
    let state = use_signal(|| SectionState::initial(in_focus, sections.contains(persist_key)));
    use_hook(|| {
        if state.peek().is_expanded() {
            sections.insert(persist_key);
        }
    });
    state
}
