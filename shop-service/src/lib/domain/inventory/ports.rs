use async_trait::async_trait;

use super::errors::InventoryError;
use super::models::CreateInventoryItemCommand;
use super::models::InventoryItem;
use crate::domain::paging::Page;

/// Port for inventory domain service operations.
#[async_trait]
pub trait InventoryServicePort: Send + Sync + 'static {
    /// Create a new inventory item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(
        &self,
        command: CreateInventoryItemCommand,
    ) -> Result<InventoryItem, InventoryError>;

    /// List inventory items in creation order within the page window.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self, page: Page) -> Result<Vec<InventoryItem>, InventoryError>;
}

/// Persistence operations for inventory items.
#[async_trait]
pub trait InventoryRepository: Send + Sync + 'static {
    /// Persist a new inventory item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError>;

    /// Retrieve items in creation order within the page window.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, page: Page) -> Result<Vec<InventoryItem>, InventoryError>;
}
