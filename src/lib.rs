//! Documentation site components: example cards and a collapsible,
//! session-persisted navigation sidebar, built on Dioxus.

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod scroll;
pub mod storage;
pub mod types;
pub mod utils;

pub use config::{SectionKeying, SidebarConfig};
pub use error::{Error, Result};
pub use storage::{BrowserSessionStore, MemoryStore, OpenSections, SectionState, SessionStore};
pub use types::{NavLink, NavNode, NavTree, RouteState, Technology};
