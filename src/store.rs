//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, Role, User};

/// Data fetched by the pages, kept for the lifetime of the app
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items shown in the inventory table
    pub items: Vec<Item>,
    /// Users shown in settings
    pub users: Vec<User>,
    /// Signed-in user, once loaded
    pub current_user: Option<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: u64) {
    store.items().write().retain(|item| item.id != item_id);
}

/// Replace an item in the store by ID
pub fn store_update_item(store: &AppStore, updated: Item) {
    if let Some(item) = store.items().write().iter_mut().find(|item| item.id == updated.id) {
        *item = updated;
    }
}

pub fn store_set_users(store: &AppStore, users: Vec<User>) {
    *store.users().write() = users;
}

/// Change a user's role locally; nothing is sent to the server
pub fn store_set_user_role(store: &AppStore, user_id: u64, role: Role) {
    if let Some(user) = store.users().write().iter_mut().find(|u| u.id == user_id) {
        user.role = role;
    }
}

pub fn store_set_current_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
}

/// Forget everything fetched under the previous session
pub fn store_clear(store: &AppStore) {
    store_set_items(store, Vec::new());
    store_set_users(store, Vec::new());
    store_set_current_user(store, None);
}
