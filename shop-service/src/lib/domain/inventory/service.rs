use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::errors::InventoryError;
use super::models::CreateInventoryItemCommand;
use super::models::InventoryItem;
use super::ports::InventoryRepository;
use super::ports::InventoryServicePort;
use crate::domain::paging::Page;

/// Concrete implementation of InventoryServicePort.
///
/// Generic over repository for testability.
pub struct InventoryService<IR>
where
    IR: InventoryRepository,
{
    repository: Arc<IR>,
}

impl<IR> InventoryService<IR>
where
    IR: InventoryRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> InventoryServicePort for InventoryService<IR>
where
    IR: InventoryRepository,
{
    async fn create_item(
        &self,
        command: CreateInventoryItemCommand,
    ) -> Result<InventoryItem, InventoryError> {
        let now = Utc::now();

        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: command.name,
            current_stock: command.current_stock,
            unit: command.unit,
            min_threshold: command.min_threshold,
            threshold_unit: command.threshold_unit,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(item).await
    }

    async fn list_items(&self, page: Page) -> Result<Vec<InventoryItem>, InventoryError> {
        self.repository.list(page).await
    }
}
