use crate::error::InventoryError;
use crate::models::inventory::Inventory;

pub(crate) fn format_json(inventory: &Inventory) -> Result<String, InventoryError> {
    Ok(serde_json::to_string_pretty(inventory)?)
}

pub(crate) fn format_yaml(inventory: &Inventory) -> Result<String, InventoryError> {
    Ok(serde_yaml::to_string(inventory)?)
}
