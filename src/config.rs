//! Sidebar configuration.
//!
//! Everything here is content-authoring data rather than behaviour: the
//! storage slot name, how persisted section keys are formed and the extra
//! alias links some sections carry.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{NavLink, RouteState};

pub const DEFAULT_STORAGE_KEY: &str = "openedAccordions";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Session storage slot holding the JSON array of open sections.
    pub storage_key: String,
    pub keying: SectionKeying,
    pub alias_menu: Option<AliasMenu>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            keying: SectionKeying::default(),
            alias_menu: Some(AliasMenu::default()),
        }
    }
}

impl SidebarConfig {
    /// Parses a (possibly partial) config document; absent fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Aliases to append after the children of `section`, if any.
    pub fn aliases_for(&self, section: &str, route: &RouteState) -> &[NavLink] {
        match &self.alias_menu {
            Some(menu) if menu.applies_to(section, route) => &menu.entries,
            _ => &[],
        }
    }
}

/// How a section is identified in the persisted open-sections list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKeying {
    /// Bare section name. Branches sharing a name at different depths
    /// share their open state.
    #[default]
    Name,
    /// Slash-joined path of section names from the root.
    Path,
}

impl SectionKeying {
    pub fn persist_key(self, parent_path: &str, key: &str) -> String {
        match self {
            SectionKeying::Name => key.to_string(),
            SectionKeying::Path => child_path(parent_path, key),
        }
    }
}

/// Slash-joined path of `key` below `parent_path`.
pub fn child_path(parent_path: &str, key: &str) -> String {
    if parent_path.is_empty() {
        key.to_string()
    } else {
        format!("{parent_path}/{key}")
    }
}

/// Extra leaves appended to one section unless the reader is inside an
/// excluded top-level area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AliasMenu {
    pub section: String,
    pub excluded_first_segment: String,
    pub entries: Vec<NavLink>,
}

impl Default for AliasMenu {
    fn default() -> Self {
        Self {
            section: "features".to_string(),
            excluded_first_segment: "server-side".to_string(),
            entries: vec![
                NavLink::new("Room APIs", "/docs/server-side/v2/Rooms/object"),
                NavLink::new("Webhooks", "/docs/server-side/v2/introduction/webhook"),
                NavLink::new("SFU Recording", "/docs/server-side/v2/Destinations/recording"),
            ],
        }
    }
}

impl AliasMenu {
    pub fn applies_to(&self, section: &str, route: &RouteState) -> bool {
        section == self.section && route.first_segment() != Some(self.excluded_first_segment.as_str())
    }
}
