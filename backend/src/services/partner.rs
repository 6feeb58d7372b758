//! Partner directory service: lazy creation and the listing projections

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::error::AppResult;
use shared::models::{ArticleSummary, Partner, PartnerArticleView, PartnerView};
use shared::validation::normalize_partner_name;

/// Partner service for resolution and listing views
#[derive(Clone)]
pub struct PartnerService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct PartnerRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    article_name: String,
    total_quantity: Decimal,
}

#[derive(Debug, FromRow)]
struct PartnerArticleRow {
    id: Uuid,
    partner_id: Uuid,
    partner_name: String,
    article_name: String,
    quantity: Decimal,
}

impl PartnerService {
    /// Create a new PartnerService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Resolve a free-text partner name to an existing partner, creating one
    /// on first sight.
    ///
    /// Names are matched by normalized (lower-cased, trimmed) equality. Runs
    /// on the caller's connection so the buy path can keep it inside its
    /// transaction; the unique index on the normalized name serializes
    /// concurrent identical-name submissions onto a single row.
    pub async fn resolve_or_create(conn: &mut PgConnection, name: &str) -> AppResult<Partner> {
        let normalized = normalize_partner_name(name);

        let row = sqlx::query_as::<_, PartnerRow>(
            r#"
            INSERT INTO partners (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, created_at
            "#,
        )
        .bind(&normalized)
        .fetch_one(conn)
        .await?;

        Ok(Partner {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        })
    }

    /// Look up a partner by id
    pub async fn find_by_id(&self, partner_id: Uuid) -> AppResult<Option<Partner>> {
        let row = sqlx::query_as::<_, PartnerRow>(
            "SELECT id, name, created_at FROM partners WHERE id = $1",
        )
        .bind(partner_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|r| Partner {
            id: r.id,
            name: r.name,
            created_at: r.created_at,
        }))
    }

    /// All partners, id and name only
    pub async fn list_partners(&self) -> AppResult<Vec<PartnerView>> {
        let rows = sqlx::query_as::<_, PartnerRow>(
            "SELECT id, name, created_at FROM partners ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PartnerView {
                id: r.id,
                partner_name: r.name,
            })
            .collect())
    }

    /// Distinct article names with summed current-stock quantity across all
    /// partners, aggregated from the stock ledger
    pub async fn list_article_summaries(&self) -> AppResult<Vec<ArticleSummary>> {
        let rows = sqlx::query_as::<_, ArticleSummaryRow>(
            r#"
            SELECT article_name, COALESCE(SUM(quantity), 0) AS total_quantity
            FROM stock_entries
            GROUP BY article_name
            ORDER BY article_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ArticleSummary {
                article_name: r.article_name,
                total_quantity: r.total_quantity,
            })
            .collect())
    }

    /// Every stock row joined to its partner name; feeds the dispatch form's
    /// availability picker
    pub async fn list_partner_articles(&self) -> AppResult<Vec<PartnerArticleView>> {
        let rows = sqlx::query_as::<_, PartnerArticleRow>(
            r#"
            SELECT s.id, s.partner_id, p.name AS partner_name, s.article_name, s.quantity
            FROM stock_entries s
            JOIN partners p ON p.id = s.partner_id
            ORDER BY p.name, s.article_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PartnerArticleView {
                id: r.id,
                partner_id: r.partner_id,
                partner_name: r.partner_name,
                article_name: r.article_name,
                quantity: r.quantity,
            })
            .collect())
    }
}
