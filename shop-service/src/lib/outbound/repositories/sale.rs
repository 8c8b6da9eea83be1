use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::paging::Page;
use crate::domain::sales::errors::SalesError;
use crate::domain::sales::models::PaymentMethodTotal;
use crate::domain::sales::models::Sale;
use crate::domain::sales::models::SaleItem;
use crate::domain::sales::models::SalesTotals;
use crate::domain::sales::ports::SaleRepository;

pub struct PostgresSaleRepository {
    pool: PgPool,
}

impl PostgresSaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SaleRow {
    id: Uuid,
    amount: f64,
    items: Json<Vec<SaleItem>>,
    payment_method: String,
    created_at: DateTime<Utc>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Sale {
            id: row.id,
            amount: row.amount,
            items: row.items.0,
            payment_method: row.payment_method,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TotalsRow {
    total_revenue: f64,
    sale_count: i64,
}

#[derive(sqlx::FromRow)]
struct PaymentMethodRow {
    payment_method: String,
    total: f64,
    count: i64,
}

#[async_trait]
impl SaleRepository for PostgresSaleRepository {
    async fn create(&self, sale: Sale) -> Result<Sale, SalesError> {
        sqlx::query(
            r#"
            INSERT INTO sales (id, amount, items, payment_method, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(sale.id)
        .bind(sale.amount)
        .bind(Json(&sale.items))
        .bind(&sale.payment_method)
        .bind(sale.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SalesError::DatabaseError(e.to_string()))?;

        Ok(sale)
    }

    async fn list(&self, page: Page) -> Result<Vec<Sale>, SalesError> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, amount, items, payment_method, created_at
            FROM sales
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SalesError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }

    async fn totals_between(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<SalesTotals, SalesError> {
        let totals = sqlx::query_as::<_, TotalsRow>(
            r#"
            SELECT COALESCE(SUM(amount), 0) AS total_revenue,
                   COUNT(*) AS sale_count
            FROM sales
            WHERE created_at BETWEEN $1 AND $2
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| SalesError::DatabaseError(e.to_string()))?;

        let by_payment_method = sqlx::query_as::<_, PaymentMethodRow>(
            r#"
            SELECT payment_method,
                   COALESCE(SUM(amount), 0) AS total,
                   COUNT(*) AS count
            FROM sales
            WHERE created_at BETWEEN $1 AND $2
            GROUP BY payment_method
            ORDER BY total DESC
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SalesError::DatabaseError(e.to_string()))?;

        Ok(SalesTotals {
            total_revenue: totals.total_revenue,
            sale_count: totals.sale_count,
            by_payment_method: by_payment_method
                .into_iter()
                .map(|row| PaymentMethodTotal {
                    payment_method: row.payment_method,
                    total: row.total,
                    count: row.count,
                })
                .collect(),
        })
    }
}
