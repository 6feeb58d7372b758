//! Stock ledger service: the buy path and the stock listing
//!
//! A stock-add is one SQL transaction: partner resolution, a `FOR UPDATE`
//! lock on the (partner, article) row, the insert or additive update, and
//! the buy entry appended to the transaction log. The row lock serializes
//! concurrent buys on the same pair; the transaction keeps the ledger and
//! the log consistent with each other.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::PartnerService;
use shared::ledger::{apply_buy, weight_per_unit, StockTotals};
use shared::models::{AddStockInput, StockEntryView, StockOutcome};
use shared::types::TransactionKind;
use shared::validation::{
    validate_article_name, validate_bags, validate_partner_name, validate_quantity,
    validate_weight,
};

/// Stock service for buy-side mutations and the ledger listing
#[derive(Clone)]
pub struct StockService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct LockedStockRow {
    id: Uuid,
    quantity: Decimal,
    weight_kg: Decimal,
    number_of_bags: i32,
}

#[derive(Debug, FromRow)]
struct StockAudit {
    id: Uuid,
    business_date: NaiveDate,
    last_modified_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct StockListRow {
    id: Uuid,
    partner_id: Uuid,
    partner_name: String,
    article_name: String,
    quantity: Decimal,
    weight_kg: Decimal,
    weight_per_unit: Decimal,
    number_of_bags: i32,
    business_date: NaiveDate,
    last_modified_at: DateTime<Utc>,
}

impl StockService {
    /// Create a new StockService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a buy: create or accumulate the (partner, article) stock row
    /// and append a buy entry to the transaction log
    pub async fn add_stock(
        &self,
        input: AddStockInput,
    ) -> AppResult<(StockOutcome, StockEntryView)> {
        validate_partner_name(&input.partner_name)
            .map_err(|msg| AppError::validation("partnerName", msg))?;
        validate_article_name(&input.article_name)
            .map_err(|msg| AppError::validation("articleName", msg))?;
        validate_quantity(input.quantity_in_stock)
            .map_err(|msg| AppError::validation("quantityInStock", msg))?;
        validate_weight(input.weight).map_err(|msg| AppError::validation("weight", msg))?;
        let bags = input.number_of_bags.unwrap_or(0);
        validate_bags(bags).map_err(|msg| AppError::validation("numberOfBags", msg))?;

        let article_name = input.article_name.trim().to_string();

        let mut tx = self.db.begin().await?;

        let partner = PartnerService::resolve_or_create(&mut *tx, &input.partner_name).await?;

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

        let (outcome, totals, audit) = match existing {
            Some(row) => {
                let mut totals = StockTotals {
                    quantity: row.quantity,
                    weight_kg: row.weight_kg,
                    number_of_bags: row.number_of_bags,
                    weight_per_unit: Decimal::ZERO,
                };
                apply_buy(&mut totals, input.quantity_in_stock, input.weight, bags);

                let audit = sqlx::query_as::<_, StockAudit>(
                    r#"
                    UPDATE stock_entries
                    SET quantity = $1, weight_kg = $2, number_of_bags = $3,
                        weight_per_unit = $4, last_modified_at = NOW()
                    WHERE id = $5
                    RETURNING id, business_date, last_modified_at
                    "#,
                )
                .bind(totals.quantity)
                .bind(totals.weight_kg)
                .bind(totals.number_of_bags)
                .bind(totals.weight_per_unit)
                .bind(row.id)
                .fetch_one(&mut *tx)
                .await?;

                (StockOutcome::Updated, totals, audit)
            }
            None => {
                let totals = StockTotals::opening(input.quantity_in_stock, input.weight, bags);

                let audit = sqlx::query_as::<_, StockAudit>(
                    r#"
                    INSERT INTO stock_entries (
                        partner_id, article_name, quantity, weight_kg,
                        number_of_bags, weight_per_unit, business_date
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING id, business_date, last_modified_at
                    "#,
                )
                .bind(partner.id)
                .bind(&article_name)
                .bind(totals.quantity)
                .bind(totals.weight_kg)
                .bind(totals.number_of_bags)
                .bind(totals.weight_per_unit)
                .bind(input.date)
                .fetch_one(&mut *tx)
                .await?;

                (StockOutcome::Created, totals, audit)
            }
        };

        // Every buy lands in the log, carrying the ratio of this movement
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
        .bind(TransactionKind::Buy.as_str())
        .bind(input.quantity_in_stock)
        .bind(input.weight)
        .bind(weight_per_unit(input.weight, input.quantity_in_stock))
        .bind(bags)
        .bind(input.date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let view = StockEntryView {
            id: audit.id,
            partner_id: partner.id,
            partner_name: partner.name,
            article_name,
            quantity_in_stock: totals.quantity,
            weight: totals.weight_kg,
            weight_per_unit: totals.weight_per_unit,
            number_of_bags: totals.number_of_bags,
            business_date: audit.business_date,
            last_modified_at: audit.last_modified_at,
        };

        Ok((outcome, view))
    }

    /// All stock rows denormalized with their partner name
    pub async fn list_stocks(&self) -> AppResult<Vec<StockEntryView>> {
        let rows = sqlx::query_as::<_, StockListRow>(
            r#"
            SELECT s.id, s.partner_id, p.name AS partner_name, s.article_name,
                   s.quantity, s.weight_kg, s.weight_per_unit, s.number_of_bags,
                   s.business_date, s.last_modified_at
            FROM stock_entries s
            JOIN partners p ON p.id = s.partner_id
            ORDER BY s.last_modified_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| StockEntryView {
                id: r.id,
                partner_id: r.partner_id,
                partner_name: r.partner_name,
                article_name: r.article_name,
                quantity_in_stock: r.quantity,
                weight: r.weight_kg,
                weight_per_unit: r.weight_per_unit,
                number_of_bags: r.number_of_bags,
                business_date: r.business_date,
                last_modified_at: r.last_modified_at,
            })
            .collect())
    }
}
