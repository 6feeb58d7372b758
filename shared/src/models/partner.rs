//! Partner directory models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trading counterparty
///
/// Created lazily on the first stock entry for an unseen name and never
/// updated or deleted. Names are stored lower-cased and trimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Partner listing entry (mode `partner`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerView {
    pub id: Uuid,
    pub partner_name: String,
}

/// Article listing entry (mode `article`): distinct article with summed
/// current-stock quantity across all partners
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub article_name: String,
    pub total_quantity: Decimal,
}

/// Stock row joined to its partner (mode `partner_and_agency`), used to
/// populate the dispatch form's per-partner-article picker. `quantity` is
/// the current ledger quantity, i.e. what is available to dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerArticleView {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub partner_name: String,
    pub article_name: String,
    pub quantity: Decimal,
}
