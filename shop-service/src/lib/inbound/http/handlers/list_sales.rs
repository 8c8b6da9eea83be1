use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::paging::Page;
use crate::domain::sales::models::Sale;
use crate::domain::sales::models::SaleItem;
use crate::inbound::http::router::AppState;

pub async fn list_sales(
    State(state): State<AppState>,
    Query(params): Query<ListSalesParams>,
) -> Result<ApiSuccess<Vec<SaleData>>, ApiError> {
    let page = Page {
        skip: params.skip.unwrap_or(0),
        limit: params.limit.unwrap_or(100),
    };

    state
        .sales_service
        .list_sales(page)
        .await
        .map_err(ApiError::from)
        .map(|sales| {
            ApiSuccess::new(StatusCode::OK, sales.iter().map(SaleData::from).collect())
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListSalesParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleData {
    pub id: String,
    pub amount: f64,
    pub items: Vec<SaleItem>,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Sale> for SaleData {
    fn from(sale: &Sale) -> Self {
        Self {
            id: sale.id.to_string(),
            amount: sale.amount,
            items: sale.items.clone(),
            payment_method: sale.payment_method.clone(),
            created_at: sale.created_at,
        }
    }
}
