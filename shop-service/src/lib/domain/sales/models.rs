use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A completed sale.
///
/// `amount` is the total charged; `items` is the receipt breakdown, stored
/// alongside the sale as a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    pub amount: f64,
    pub items: Vec<SaleItem>,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

/// One line of a sale's receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

/// Command to record a new sale.
#[derive(Debug, Clone)]
pub struct CreateSaleCommand {
    pub amount: f64,
    pub items: Vec<SaleItem>,
    pub payment_method: String,
}

/// Aggregated totals over a date window, as computed by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTotals {
    pub total_revenue: f64,
    pub sale_count: i64,
    pub by_payment_method: Vec<PaymentMethodTotal>,
}

/// Revenue attributed to one payment method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethodTotal {
    pub payment_method: String,
    pub total: f64,
    pub count: i64,
}

/// Finance summary reported upward: the repository totals plus the window
/// they cover and the derived average sale.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSummary {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_revenue: f64,
    pub sale_count: i64,
    pub average_sale: f64,
    pub by_payment_method: Vec<PaymentMethodTotal>,
}
