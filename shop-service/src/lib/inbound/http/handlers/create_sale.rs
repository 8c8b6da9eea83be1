use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::list_sales::SaleData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::sales::models::CreateSaleCommand;
use crate::domain::sales::models::SaleItem;
use crate::inbound::http::router::AppState;

pub async fn create_sale(
    State(state): State<AppState>,
    Json(body): Json<CreateSaleRequest>,
) -> Result<ApiSuccess<SaleData>, ApiError> {
    state
        .sales_service
        .create_sale(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref sale| ApiSuccess::new(StatusCode::CREATED, sale.into()))
}

/// HTTP request body for recording a sale (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSaleRequest {
    amount: f64,
    items: Vec<SaleItem>,
    payment_method: String,
}

impl CreateSaleRequest {
    fn into_command(self) -> CreateSaleCommand {
        CreateSaleCommand {
            amount: self.amount,
            items: self.items,
            payment_method: self.payment_method,
        }
    }
}
