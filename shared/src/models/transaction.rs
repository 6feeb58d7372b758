//! Transaction log models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::TransactionKind;

/// An append-only transaction log row joined to its partner's current name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub partner_name: String,
    pub article_name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: Decimal,
    pub weight: Decimal,
    #[serde(rename = "average")]
    pub weight_per_unit: Decimal,
    pub number_of_bags: i32,
    pub transaction_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Filter for the transaction report
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match on the partner's current name
    pub partner: Option<String>,
    /// Case-insensitive substring match on the article name
    pub article: Option<String>,
    pub kind: Option<TransactionKind>,
    /// 1-based page number
    pub page: u32,
}
