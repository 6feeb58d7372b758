//! Common wire types used across the platform

use serde::{Deserialize, Serialize};

/// Fixed page size for the transaction report
pub const TRANSACTION_PAGE_SIZE: u32 = 15;

/// Kind of ledger movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "buy",
            TransactionKind::Sell => "sell",
        }
    }

    /// Parse a filter value; anything other than "buy"/"sell" is no filter
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "buy" => Some(TransactionKind::Buy),
            "sell" => Some(TransactionKind::Sell),
            _ => None,
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    /// Build metadata for a 1-based page over `total` items
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// Number of items expected on this page
    pub fn items_on_page(&self) -> u64 {
        let skipped = u64::from(self.limit) * u64::from(self.page.saturating_sub(1));
        self.total.saturating_sub(skipped).min(u64::from(self.limit))
    }
}

/// Normalize a raw page parameter; malformed or out-of-range input means page 1
pub fn normalize_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_meta_derives_pages() {
        let meta = PaginationMeta::new(2, 15, 31);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_previous_page);
        assert_eq!(meta.items_on_page(), 15);
    }

    #[test]
    fn last_page_is_partial() {
        let meta = PaginationMeta::new(3, 15, 31);
        assert!(!meta.has_next_page);
        assert_eq!(meta.items_on_page(), 1);
    }

    #[test]
    fn empty_set_has_no_pages() {
        let meta = PaginationMeta::new(1, 15, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
        assert_eq!(meta.items_on_page(), 0);
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some("abc")), 1);
        assert_eq!(normalize_page(Some("0")), 1);
        assert_eq!(normalize_page(Some("4")), 4);
    }

    #[test]
    fn kind_filter_parsing() {
        assert_eq!(TransactionKind::from_filter("buy"), Some(TransactionKind::Buy));
        assert_eq!(TransactionKind::from_filter("sell"), Some(TransactionKind::Sell));
        assert_eq!(TransactionKind::from_filter("swap"), None);
        assert_eq!(TransactionKind::from_filter(""), None);
    }
}
