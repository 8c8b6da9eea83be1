use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::inventory::models::InventoryItem;
use crate::domain::paging::Page;
use crate::inbound::http::router::AppState;

pub async fn list_inventory(
    State(state): State<AppState>,
    Query(params): Query<ListInventoryParams>,
) -> Result<ApiSuccess<Vec<InventoryItemData>>, ApiError> {
    let page = Page {
        skip: params.skip.unwrap_or(0),
        limit: params.limit.unwrap_or(100),
    };

    state
        .inventory_service
        .list_items(page)
        .await
        .map_err(ApiError::from)
        .map(|items| {
            ApiSuccess::new(
                StatusCode::OK,
                items.iter().map(InventoryItemData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListInventoryParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItemData {
    pub id: String,
    pub name: String,
    pub current_stock: f64,
    pub unit: String,
    pub min_threshold: f64,
    pub threshold_unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&InventoryItem> for InventoryItemData {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            current_stock: item.current_stock,
            unit: item.unit.clone(),
            min_threshold: item.min_threshold,
            threshold_unit: item.threshold_unit.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
