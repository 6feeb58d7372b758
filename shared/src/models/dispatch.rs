//! Dispatch (outbound shipment) models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for the dispatch (sell) operation
///
/// Unlike the buy path, the caller must already hold a valid partner id;
/// no name normalization happens here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDispatchInput {
    pub partner_id: Uuid,
    pub article_name: String,
    pub quantity: Decimal,
    pub kg: Decimal,
    pub number_of_bags: Option<i32>,
    pub date: NaiveDate,
}

/// A dispatch row denormalized with its partner name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchView {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub partner_name: String,
    pub article_name: String,
    pub quantity: Decimal,
    pub kg: Decimal,
    /// Units-per-kg ratio of the shipment, kept under the historical wire
    /// name. Deliberately a different quantity than the stock ledger's
    /// weight-per-unit.
    #[serde(rename = "average")]
    pub units_per_kg: Decimal,
    pub number_of_bags: i32,
    pub dispatch_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Response body for a created dispatch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchCreated {
    #[serde(flatten)]
    pub dispatch: DispatchView,
    /// False when no matching stock row existed, in which case the sell is
    /// recorded only in the dispatch and transaction logs
    pub stock_adjusted: bool,
}
