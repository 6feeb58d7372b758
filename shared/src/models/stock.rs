//! Stock ledger models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for the stock-add (buy) operation
///
/// `date` is the business date of the purchase; audit timestamps are set by
/// the server. Any client-supplied average is ignored, the ratio is derived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStockInput {
    pub partner_name: String,
    pub article_name: String,
    pub quantity_in_stock: Decimal,
    pub weight: Decimal,
    pub number_of_bags: Option<i32>,
    pub date: NaiveDate,
}

/// Outcome of a stock-add: whether the (partner, article) row was created
/// or an existing row accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOutcome {
    Created,
    Updated,
}

/// A stock ledger row denormalized with its partner name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntryView {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub partner_name: String,
    pub article_name: String,
    pub quantity_in_stock: Decimal,
    pub weight: Decimal,
    /// Weight-per-unit ratio, kept under the historical wire name
    #[serde(rename = "average")]
    pub weight_per_unit: Decimal,
    pub number_of_bags: i32,
    pub business_date: NaiveDate,
    pub last_modified_at: DateTime<Utc>,
}
