//! HTTP handlers for the partner/article listing endpoint
//!
//! One endpoint, three fixed response shapes selected by the `mode` query
//! parameter: `partner`, `article`, or `partner_and_agency`.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::PartnerService;
use crate::AppState;
use crate::models::{ArticleSummary, PartnerArticleView, PartnerView};

#[derive(Deserialize)]
pub struct LookupQuery {
    pub mode: Option<String>,
}

/// The three listing payload shapes
#[derive(Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Partners { partners: Vec<PartnerView> },
    Articles { articles: Vec<ArticleSummary> },
    PartnerArticles { partners: Vec<PartnerArticleView> },
}

/// Serve one of the three listing projections
pub async fn list_lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> AppResult<Json<LookupResponse>> {
    let service = PartnerService::new(state.db);
    let mode = query.mode.as_deref().unwrap_or("partner");

    let response = match mode {
        "partner" => LookupResponse::Partners {
            partners: service.list_partners().await?,
        },
        "article" => LookupResponse::Articles {
            articles: service.list_article_summaries().await?,
        },
        "partner_and_agency" => LookupResponse::PartnerArticles {
            partners: service.list_partner_articles().await?,
        },
        other => {
            return Err(AppError::validation(
                "mode",
                &format!("Invalid mode parameter: {}", other),
            ));
        }
    };

    Ok(Json(response))
}
