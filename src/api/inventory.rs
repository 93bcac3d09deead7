//! Inventory Commands

use crate::models::{InventoryCreate, InventoryItem};

pub async fn list_inventory() -> Result<Vec<InventoryItem>, String> {
    super::get_json("/inventory/").await
}

pub async fn create_inventory_item(item: &InventoryCreate) -> Result<InventoryItem, String> {
    super::post_json("/inventory/", item).await
}

pub async fn update_inventory_item(id: u32, item: &InventoryCreate) -> Result<InventoryItem, String> {
    super::put_json(&format!("/inventory/{}", id), item).await
}

pub async fn delete_inventory_item(id: u32) -> Result<(), String> {
    super::delete(&format!("/inventory/{}", id)).await
}
