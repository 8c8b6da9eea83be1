use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::list_inventory::InventoryItemData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::inventory::models::CreateInventoryItemCommand;
use crate::inbound::http::router::AppState;

pub async fn create_inventory_item(
    State(state): State<AppState>,
    Json(body): Json<CreateInventoryItemRequest>,
) -> Result<ApiSuccess<InventoryItemData>, ApiError> {
    state
        .inventory_service
        .create_item(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

/// HTTP request body for creating an inventory item (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateInventoryItemRequest {
    name: String,
    current_stock: f64,
    unit: String,
    min_threshold: f64,
    threshold_unit: String,
}

impl CreateInventoryItemRequest {
    fn into_command(self) -> CreateInventoryItemCommand {
        CreateInventoryItemCommand {
            name: self.name,
            current_stock: self.current_stock,
            unit: self.unit,
            min_threshold: self.min_threshold,
            threshold_unit: self.threshold_unit,
        }
    }
}
