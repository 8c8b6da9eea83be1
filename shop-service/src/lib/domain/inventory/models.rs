use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Stock item tracked by the shop.
///
/// `current_stock` and `min_threshold` carry their own units; the threshold
/// is the level at which the shop wants to reorder.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub current_stock: f64,
    pub unit: String,
    pub min_threshold: f64,
    pub threshold_unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to create a new inventory item.
#[derive(Debug, Clone)]
pub struct CreateInventoryItemCommand {
    pub name: String,
    pub current_stock: f64,
    pub unit: String,
    pub min_threshold: f64,
    pub threshold_unit: String,
}

