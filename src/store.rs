//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! shared snapshots views render from; every edit triggers a re-fetch of
//! the affected list rather than incremental patching, but a few cheap
//! cases update the store in place.

use crate::models::{Group, InventoryItem, Meeting, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat group list (selectors, dashboard)
    pub groups: Vec<Group>,
    /// All lab members
    pub users: Vec<User>,
    /// All meetings visible to the session user
    pub meetings: Vec<Meeting>,
    /// Inventory snapshot
    pub inventory: Vec<InventoryItem>,
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

/// Replace an inventory item in the store by ID
pub fn store_update_inventory_item(store: &AppStore, updated: InventoryItem) {
    store
        .inventory()
        .write()
        .iter_mut()
        .find(|item| item.id == updated.id)
        .map(|item| *item = updated);
}

/// Remove an inventory item from the store by ID
pub fn store_remove_inventory_item(store: &AppStore, item_id: u32) {
    store.inventory().write().retain(|item| item.id != item_id);
}

/// Remove a meeting from the store by ID
pub fn store_remove_meeting(store: &AppStore, meeting_id: u32) {
    store.meetings().write().retain(|m| m.id != meeting_id);
}

/// Remove a group from the store by ID
pub fn store_remove_group(store: &AppStore, group_id: u32) {
    store.groups().write().retain(|g| g.id != group_id);
}
