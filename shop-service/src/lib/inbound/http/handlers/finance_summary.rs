use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::sales::models::FinanceSummary;
use crate::domain::sales::models::PaymentMethodTotal;
use crate::inbound::http::router::AppState;

/// Revenue summary over a date window, defaulting to the last 30 days.
pub async fn finance_summary(
    State(state): State<AppState>,
    Query(params): Query<FinanceSummaryParams>,
) -> Result<ApiSuccess<FinanceSummaryData>, ApiError> {
    let end_date = params.end_date.unwrap_or_else(Utc::now);
    let start_date = params
        .start_date
        .unwrap_or_else(|| end_date - Duration::days(30));

    state
        .sales_service
        .summarize(start_date, end_date)
        .await
        .map_err(ApiError::from)
        .map(|ref summary| ApiSuccess::new(StatusCode::OK, summary.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FinanceSummaryParams {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSummaryData {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_revenue: f64,
    pub sale_count: i64,
    pub average_sale: f64,
    pub by_payment_method: Vec<PaymentMethodTotal>,
}

impl From<&FinanceSummary> for FinanceSummaryData {
    fn from(summary: &FinanceSummary) -> Self {
        Self {
            start_date: summary.start_date,
            end_date: summary.end_date,
            total_revenue: summary.total_revenue,
            sale_count: summary.sale_count,
            average_sale: summary.average_sale,
            by_payment_method: summary.by_payment_method.clone(),
        }
    }
}
