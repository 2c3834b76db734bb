//! Browser Storage
//!
//! Thin wrappers over `localStorage` / `sessionStorage`. Missing storage
//! (private mode, non-browser targets) reads as empty and ignores writes.

use web_sys::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Survives browser restarts
    Local,
    /// Cleared when the tab closes
    Session,
}

fn storage(area: Area) -> Option<Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        Area::Local => window.local_storage(),
        Area::Session => window.session_storage(),
    };
    storage.ok().flatten()
}

pub fn get(area: Area, key: &str) -> Option<String> {
    storage(area)?.get_item(key).ok().flatten()
}

pub fn set(area: Area, key: &str, value: &str) {
    if let Some(s) = storage(area) {
        if let Err(e) = s.set_item(key, value) {
            web_sys::console::error_1(&format!("[Storage] Could not write {}: {:?}", key, e).into());
        }
    }
}

pub fn remove(area: Area, key: &str) {
    if let Some(s) = storage(area) {
        let _ = s.remove_item(key);
    }
}
