use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use super::errors::SalesError;
use super::models::CreateSaleCommand;
use super::models::FinanceSummary;
use super::models::Sale;
use super::models::SalesTotals;
use crate::domain::paging::Page;

/// Port for sales and finance domain service operations.
#[async_trait]
pub trait SalesServicePort: Send + Sync + 'static {
    /// Record a new sale.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_sale(&self, command: CreateSaleCommand) -> Result<Sale, SalesError>;

    /// List sales newest first within the page window.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_sales(&self, page: Page) -> Result<Vec<Sale>, SalesError>;

    /// Summarize revenue between two instants (inclusive window).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn summarize(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<FinanceSummary, SalesError>;
}

/// Persistence operations for sales.
#[async_trait]
pub trait SaleRepository: Send + Sync + 'static {
    /// Persist a new sale.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, sale: Sale) -> Result<Sale, SalesError>;

    /// Retrieve sales newest first within the page window.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, page: Page) -> Result<Vec<Sale>, SalesError>;

    /// Aggregate totals for sales recorded inside the window.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn totals_between(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<SalesTotals, SalesError>;
}
