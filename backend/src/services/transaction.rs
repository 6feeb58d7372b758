//! Transaction log report: filtered, paginated, partner-joined reads
//!
//! Two queries per request under the same filter: one for the page of rows,
//! one for the total count backing the pagination metadata.

use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{TransactionFilter, TransactionView};
use shared::types::{PaginatedResponse, PaginationMeta, TransactionKind, TRANSACTION_PAGE_SIZE};

/// Transaction report service
#[derive(Clone)]
pub struct TransactionService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct TransactionRow {
    id: Uuid,
    partner_id: Uuid,
    partner_name: String,
    article_name: String,
    kind: String,
    quantity: Decimal,
    weight_kg: Decimal,
    weight_per_unit: Decimal,
    number_of_bags: i32,
    transaction_date: NaiveDate,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TransactionService {
    /// Create a new TransactionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Serve one page of the transaction log, joined to partner names,
    /// newest business date first
    pub async fn list_transactions(
        &self,
        filter: TransactionFilter,
    ) -> AppResult<PaginatedResponse<TransactionView>> {
        let page = filter.page.max(1);
        let limit = TRANSACTION_PAGE_SIZE;
        let offset = i64::from(limit) * i64::from(page - 1);

        let kind = filter.kind.map(|k| k.as_str().to_string());
        let partner = filter
            .partner
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let article = filter
            .article
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT t.id, t.partner_id, p.name AS partner_name, t.article_name,
                   t.kind, t.quantity, t.weight_kg, t.weight_per_unit,
                   t.number_of_bags, t.transaction_date, t.notes, t.created_at
            FROM transaction_entries t
            JOIN partners p ON p.id = t.partner_id
            WHERE ($1::text IS NULL OR t.kind = $1)
              AND ($2::text IS NULL OR p.name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR t.article_name ILIKE '%' || $3 || '%')
            ORDER BY t.transaction_date DESC, t.created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&kind)
        .bind(&partner)
        .bind(&article)
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM transaction_entries t
            JOIN partners p ON p.id = t.partner_id
            WHERE ($1::text IS NULL OR t.kind = $1)
              AND ($2::text IS NULL OR p.name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR t.article_name ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(&kind)
        .bind(&partner)
        .bind(&article)
        .fetch_one(&self.db)
        .await?;

        let data = rows
            .into_iter()
            .map(|r| {
                let kind = TransactionKind::from_filter(&r.kind)
                    .ok_or_else(|| anyhow!("unknown transaction kind in log: {}", r.kind))?;
                Ok(TransactionView {
                    id: r.id,
                    partner_id: r.partner_id,
                    partner_name: r.partner_name,
                    article_name: r.article_name,
                    kind,
                    quantity: r.quantity,
                    weight: r.weight_kg,
                    weight_per_unit: r.weight_per_unit,
                    number_of_bags: r.number_of_bags,
                    transaction_date: r.transaction_date,
                    notes: r.notes,
                    created_at: r.created_at,
                })
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(AppError::InternalError)?;

        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta::new(page, limit, total.max(0) as u64),
        })
    }
}
