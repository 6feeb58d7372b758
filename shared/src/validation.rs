//! Validation rules for ledger inputs
//!
//! Required-field and numeric-range checks live here, at the core boundary,
//! so they hold regardless of which client submitted the request.

use rust_decimal::Decimal;

/// Validate a partner name: non-empty after trimming
pub fn validate_partner_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Partner name is required");
    }
    Ok(())
}

/// Validate an article name: non-empty after trimming
pub fn validate_article_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Article name is required");
    }
    Ok(())
}

/// Validate a movement quantity: strictly positive
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a movement weight: strictly positive
pub fn validate_weight(weight_kg: Decimal) -> Result<(), &'static str> {
    if weight_kg <= Decimal::ZERO {
        return Err("Weight must be positive");
    }
    Ok(())
}

/// Validate a bag count: non-negative
pub fn validate_bags(bags: i32) -> Result<(), &'static str> {
    if bags < 0 {
        return Err("Number of bags cannot be negative");
    }
    Ok(())
}

/// Normalize a partner name for storage and equality lookup
pub fn normalize_partner_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_must_not_be_blank() {
        assert!(validate_partner_name("Acme").is_ok());
        assert!(validate_partner_name("   ").is_err());
        assert!(validate_article_name("wheat").is_ok());
        assert!(validate_article_name("").is_err());
    }

    #[test]
    fn quantities_must_be_positive() {
        assert!(validate_quantity(Decimal::from_str("0.1").unwrap()).is_ok());
        assert!(validate_quantity(Decimal::ZERO).is_err());
        assert!(validate_quantity(Decimal::from_str("-3").unwrap()).is_err());
        assert!(validate_weight(Decimal::ZERO).is_err());
    }

    #[test]
    fn bags_may_be_zero_but_not_negative() {
        assert!(validate_bags(0).is_ok());
        assert!(validate_bags(12).is_ok());
        assert!(validate_bags(-1).is_err());
    }

    #[test]
    fn normalization_lowercases_and_trims() {
        assert_eq!(normalize_partner_name("  Acme Traders "), "acme traders");
        assert_eq!(normalize_partner_name("RAMESH"), "ramesh");
    }
}
