//! Persistence of expanded sidebar sections.
//!
//! The open-sections list lives in session-scoped key/value storage as a
//! JSON array of section keys. Storage is reached through [`SessionStore`]
//! so the sidebar never touches a process-wide global; the browser and an
//! in-memory implementation are provided.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::{Error, Result};

/// Session-scoped string key/value storage.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// The browser's `window.sessionStorage`. Unavailable outside wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or(Error::StorageUnavailable)?
            .session_storage()
            .map_err(|err| Error::Storage(format!("{err:?}")))?
            .ok_or(Error::StorageUnavailable)
    }
}

impl SessionStore for BrowserSessionStore {
    #[cfg(target_arch = "wasm32")]
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| Error::Storage(format!("{err:?}")))
    }

    #[cfg(target_arch = "wasm32")]
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }
}

/// In-memory storage, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PartialEq for MemoryStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open/closed state of one sidebar section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionState {
    Collapsed,
    Expanded,
}

impl SectionState {
    /// State a section mounts in: expanded when the route runs through it
    /// or when it was left open earlier in the session.
    pub fn initial(in_focus: bool, persisted: bool) -> Self {
        if in_focus || persisted {
            SectionState::Expanded
        } else {
            SectionState::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == SectionState::Expanded
    }
}

/// The persisted open-sections list behind a [`SessionStore`].
///
/// Every mutation is a synchronous read-modify-write of the whole list.
/// Storage failures never propagate: reads fall back to an empty list and
/// failed writes are logged.
#[derive(Clone)]
pub struct OpenSections {
    store: Rc<dyn SessionStore>,
    storage_key: String,
}

impl OpenSections {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self::with_storage_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_storage_key(store: impl SessionStore + 'static, storage_key: impl Into<String>) -> Self {
        Self {
            store: Rc::new(store),
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Persisted keys in storage order. Absent, unreadable or malformed
    /// values all read as an empty list.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.store.get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(Error::StorageUnavailable) => {
                debug!("session storage unavailable, no sections restored");
                return Vec::new();
            }
            Err(err) => {
                warn!("failed to read open sections: {}", err);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(keys) => keys,
            Err(err) => {
                warn!("ignoring malformed open sections value: {}", err);
                Vec::new()
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.load().iter().any(|k| k == key)
    }

    /// Adds `key` once, de-duplicating the stored list.
    pub fn insert(&self, key: &str) {
        let mut keys = self.load();
        keys.push(key.to_string());
        self.save(dedup(keys));
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&self, key: &str) {
        let keys = self.load().into_iter().filter(|k| k != key).collect();
        self.save(dedup(keys));
    }

    /// Handles a click on a section header and returns its new state.
    ///
    /// A section the route runs through cannot be collapsed by a click: it
    /// stays expanded and its key is re-recorded.
    pub fn toggle(&self, key: &str, current: SectionState, in_focus: bool) -> SectionState {
        let next = if in_focus || current == SectionState::Collapsed {
            self.insert(key);
            SectionState::Expanded
        } else {
            self.remove(key);
            SectionState::Collapsed
        };
        debug!(section = key, in_focus, ?current, ?next, "section toggled");
        next
    }

    fn save(&self, keys: Vec<String>) {
        let result = serde_json::to_string(&keys)
            .map_err(Error::from)
            .and_then(|json| self.store.set_item(&self.storage_key, &json));
        match result {
            Ok(()) => {}
            Err(Error::StorageUnavailable) => debug!("session storage unavailable, open sections not saved"),
            Err(err) => warn!("failed to save open sections: {}", err),
        }
    }
}

fn dedup(keys: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(keys.len());
    for key in keys {
        if !unique.contains(&key) {
            unique.push(key);
        }
    }
    unique
}
