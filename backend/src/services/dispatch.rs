//! Dispatch service: the sell path and the dispatch listing
//!
//! A dispatch always creates the dispatch record and the sell entry in the
//! transaction log. The stock decrement is a best-effort final step inside
//! the same transaction: if no (partner, article) row exists, the sell is
//! recorded only in the dispatch and transaction logs and the response says
//! so via `stock_adjusted`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::PartnerService;
use shared::ledger::{apply_sell, units_per_kg, weight_per_unit, StockTotals};
use shared::models::{CreateDispatchInput, DispatchCreated, DispatchView};
use shared::types::TransactionKind;
use shared::validation::{
    validate_article_name, validate_bags, validate_quantity, validate_weight,
};

/// Dispatch service for sell-side mutations and the dispatch listing
#[derive(Clone)]
pub struct DispatchService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct DispatchAudit {
    id: Uuid,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct LockedStockRow {
    id: Uuid,
    quantity: Decimal,
    weight_kg: Decimal,
    number_of_bags: i32,
}

#[derive(Debug, FromRow)]
struct DispatchListRow {
    id: Uuid,
    partner_id: Uuid,
    partner_name: String,
    article_name: String,
    quantity: Decimal,
    kg: Decimal,
    units_per_kg: Decimal,
    number_of_bags: i32,
    dispatch_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl DispatchService {
    /// Create a new DispatchService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sell: create the dispatch record, append a sell entry to the
    /// transaction log, and decrement the stock row if one exists
    pub async fn create_dispatch(&self, input: CreateDispatchInput) -> AppResult<DispatchCreated> {
        validate_article_name(&input.article_name)
            .map_err(|msg| AppError::validation("articleName", msg))?;
        validate_quantity(input.quantity)
            .map_err(|msg| AppError::validation("quantity", msg))?;
        validate_weight(input.kg).map_err(|msg| AppError::validation("kg", msg))?;
        let bags = input.number_of_bags.unwrap_or(0);
        validate_bags(bags).map_err(|msg| AppError::validation("numberOfBags", msg))?;

        // The dispatch path takes the partner id as given; it must exist
        let partner = PartnerService::new(self.db.clone())
            .find_by_id(input.partner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Partner".to_string()))?;

        let article_name = input.article_name.trim().to_string();
        let ratio = units_per_kg(input.quantity, input.kg);

        let mut tx = self.db.begin().await?;

        let audit = sqlx::query_as::<_, DispatchAudit>(
            r#"
            INSERT INTO dispatches (
                partner_id, article_name, quantity, kg, units_per_kg,
                number_of_bags, dispatch_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, created_at
            "#,
        )
        .bind(partner.id)
        .bind(&article_name)
        .bind(input.quantity)
        .bind(input.kg)
        .bind(ratio)
        .bind(bags)
        .bind(input.date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO transaction_entries (
                partner_id, article_name, kind, quantity, weight_kg,
                weight_per_unit, number_of_bags, transaction_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(partner.id)
        .bind(&article_name)
        .bind(TransactionKind::Sell.as_str())
        .bind(input.quantity)
        .bind(input.kg)
        .bind(weight_per_unit(input.kg, input.quantity))
        .bind(bags)
        .bind(input.date)
        .execute(&mut *tx)
        .await?;

        let existing = sqlx::query_as::<_, LockedStockRow>(
            r#"
            SELECT id, quantity, weight_kg, number_of_bags
            FROM stock_entries
            WHERE partner_id = $1 AND article_name = $2
            FOR UPDATE
            "#,
        )
        .bind(partner.id)
        .bind(&article_name)
        .fetch_optional(&mut *tx)
        .await?;

        let stock_adjusted = match existing {
            Some(row) => {
                let mut totals = StockTotals {
                    quantity: row.quantity,
                    weight_kg: row.weight_kg,
                    number_of_bags: row.number_of_bags,
                    weight_per_unit: Decimal::ZERO,
                };
                apply_sell(&mut totals, input.quantity, input.kg, bags);

                sqlx::query(
                    r#"
                    UPDATE stock_entries
                    SET quantity = $1, weight_kg = $2, number_of_bags = $3,
                        weight_per_unit = $4, last_modified_at = NOW()
                    WHERE id = $5
                    "#,
                )
                .bind(totals.quantity)
                .bind(totals.weight_kg)
                .bind(totals.number_of_bags)
                .bind(totals.weight_per_unit)
                .bind(row.id)
                .execute(&mut *tx)
                .await?;

                true
            }
            None => {
                tracing::warn!(
                    partner_id = %partner.id,
                    article = %article_name,
                    "dispatch without a matching stock row; no decrement applied"
                );
                false
            }
        };

        tx.commit().await?;

        Ok(DispatchCreated {
            dispatch: DispatchView {
                id: audit.id,
                partner_id: partner.id,
                partner_name: partner.name,
                article_name,
                quantity: input.quantity,
                kg: input.kg,
                units_per_kg: ratio,
                number_of_bags: bags,
                dispatch_date: input.date,
                created_at: audit.created_at,
            },
            stock_adjusted,
        })
    }

    /// All dispatch rows denormalized with their partner name, newest first
    pub async fn list_dispatches(&self) -> AppResult<Vec<DispatchView>> {
        let rows = sqlx::query_as::<_, DispatchListRow>(
            r#"
            SELECT d.id, d.partner_id, p.name AS partner_name, d.article_name,
                   d.quantity, d.kg, d.units_per_kg, d.number_of_bags,
                   d.dispatch_date, d.created_at
            FROM dispatches d
            JOIN partners p ON p.id = d.partner_id
            ORDER BY d.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DispatchView {
                id: r.id,
                partner_id: r.partner_id,
                partner_name: r.partner_name,
                article_name: r.article_name,
                quantity: r.quantity,
                kg: r.kg,
                units_per_kg: r.units_per_kg,
                number_of_bags: r.number_of_bags,
                dispatch_date: r.dispatch_date,
                created_at: r.created_at,
            })
            .collect())
    }
}
