use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::models::InventoryItem;
use crate::domain::inventory::ports::InventoryRepository;
use crate::domain::paging::Page;

pub struct PostgresInventoryRepository {
    pool: PgPool,
}

impl PostgresInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InventoryItemRow {
    id: Uuid,
    name: String,
    current_stock: f64,
    unit: String,
    min_threshold: f64,
    threshold_unit: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InventoryItemRow> for InventoryItem {
    fn from(row: InventoryItemRow) -> Self {
        InventoryItem {
            id: row.id,
            name: row.name,
            current_stock: row.current_stock,
            unit: row.unit,
            min_threshold: row.min_threshold,
            threshold_unit: row.threshold_unit,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        sqlx::query(
            r#"
            INSERT INTO inventory_items
                (id, name, current_stock, unit, min_threshold, threshold_unit, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.current_stock)
        .bind(&item.unit)
        .bind(item.min_threshold)
        .bind(&item.threshold_unit)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| InventoryError::DatabaseError(e.to_string()))?;

        Ok(item)
    }

    async fn list(&self, page: Page) -> Result<Vec<InventoryItem>, InventoryError> {
        let rows = sqlx::query_as::<_, InventoryItemRow>(
            r#"
            SELECT id, name, current_stock, unit, min_threshold, threshold_unit,
                   created_at, updated_at
            FROM inventory_items
            ORDER BY created_at
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InventoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }
}
