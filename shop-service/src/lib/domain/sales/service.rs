use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::SalesError;
use super::models::CreateSaleCommand;
use super::models::FinanceSummary;
use super::models::Sale;
use super::ports::SaleRepository;
use super::ports::SalesServicePort;
use crate::domain::paging::Page;

/// Concrete implementation of SalesServicePort.
///
/// Aggregation happens in the repository; this service derives the average
/// and stamps the window onto the summary.
pub struct SalesService<SR>
where
    SR: SaleRepository,
{
    repository: Arc<SR>,
}

impl<SR> SalesService<SR>
where
    SR: SaleRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SalesServicePort for SalesService<SR>
where
    SR: SaleRepository,
{
    async fn create_sale(&self, command: CreateSaleCommand) -> Result<Sale, SalesError> {
        let sale = Sale {
            id: Uuid::new_v4(),
            amount: command.amount,
            items: command.items,
            payment_method: command.payment_method,
            created_at: Utc::now(),
        };

        self.repository.create(sale).await
    }

    async fn list_sales(&self, page: Page) -> Result<Vec<Sale>, SalesError> {
        self.repository.list(page).await
    }

    async fn summarize(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<FinanceSummary, SalesError> {
        let totals = self.repository.totals_between(start_date, end_date).await?;

        let average_sale = if totals.sale_count > 0 {
            totals.total_revenue / totals.sale_count as f64
        } else {
            0.0
        };

        Ok(FinanceSummary {
            start_date,
            end_date,
            total_revenue: totals.total_revenue,
            sale_count: totals.sale_count,
            average_sale,
            by_payment_method: totals.by_payment_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::mock;

    use super::*;
    use crate::domain::sales::models::PaymentMethodTotal;
    use crate::domain::sales::models::SaleItem;
    use crate::domain::sales::models::SalesTotals;

    mock! {
        pub TestSaleRepository {}

        #[async_trait]
        impl SaleRepository for TestSaleRepository {
            async fn create(&self, sale: Sale) -> Result<Sale, SalesError>;
            async fn list(&self, page: Page) -> Result<Vec<Sale>, SalesError>;
            async fn totals_between(
                &self,
                start_date: DateTime<Utc>,
                end_date: DateTime<Utc>,
            ) -> Result<SalesTotals, SalesError>;
        }
    }

    #[tokio::test]
    async fn test_create_sale_stamps_id_and_time() {
        let mut repository = MockTestSaleRepository::new();

        repository
            .expect_create()
            .withf(|sale| sale.amount == 9.5 && !sale.id.is_nil() && sale.items.len() == 2)
            .times(1)
            .returning(|sale| Ok(sale));

        let service = SalesService::new(Arc::new(repository));

        let sale = service
            .create_sale(CreateSaleCommand {
                amount: 9.5,
                items: vec![
                    SaleItem {
                        name: "latte".to_string(),
                        quantity: 1.0,
                        price: 4.5,
                    },
                    SaleItem {
                        name: "croissant".to_string(),
                        quantity: 2.0,
                        price: 2.5,
                    },
                ],
                payment_method: "card".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(sale.payment_method, "card");
    }

    #[tokio::test]
    async fn test_summarize_derives_average() {
        let mut repository = MockTestSaleRepository::new();

        repository.expect_totals_between().times(1).returning(|_, _| {
            Ok(SalesTotals {
                total_revenue: 100.0,
                sale_count: 4,
                by_payment_method: vec![PaymentMethodTotal {
                    payment_method: "card".to_string(),
                    total: 100.0,
                    count: 4,
                }],
            })
        });

        let service = SalesService::new(Arc::new(repository));

        let end = Utc::now();
        let start = end - Duration::days(30);
        let summary = service.summarize(start, end).await.unwrap();

        assert_eq!(summary.total_revenue, 100.0);
        assert_eq!(summary.sale_count, 4);
        assert_eq!(summary.average_sale, 25.0);
        assert_eq!(summary.start_date, start);
        assert_eq!(summary.end_date, end);
    }

    #[tokio::test]
    async fn test_summarize_empty_window_has_zero_average() {
        let mut repository = MockTestSaleRepository::new();

        repository.expect_totals_between().times(1).returning(|_, _| {
            Ok(SalesTotals {
                total_revenue: 0.0,
                sale_count: 0,
                by_payment_method: vec![],
            })
        });

        let service = SalesService::new(Arc::new(repository));

        let end = Utc::now();
        let summary = service.summarize(end - Duration::days(30), end).await.unwrap();

        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.sale_count, 0);
        assert_eq!(summary.average_sale, 0.0);
        assert!(summary.by_payment_method.is_empty());
    }
}
