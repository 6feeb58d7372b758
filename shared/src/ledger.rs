//! Pure stock-ledger arithmetic
//!
//! The running totals for a (partner, article) pair and the buy/sell
//! mutations applied to them. Kept free of I/O so the invariants can be
//! tested without a database.
//!
//! Two distinct derived ratios exist in this domain and must not be
//! conflated: the ledger tracks weight-per-unit (kg per unit of stock),
//! while a dispatch reports units-per-kg of the shipped goods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current totals of one stock row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTotals {
    pub quantity: Decimal,
    pub weight_kg: Decimal,
    pub number_of_bags: i32,
    /// Derived: weight_kg / quantity, 0 when quantity is 0
    pub weight_per_unit: Decimal,
}

impl StockTotals {
    /// Totals for a first-time buy
    pub fn opening(quantity: Decimal, weight_kg: Decimal, number_of_bags: i32) -> Self {
        Self {
            quantity,
            weight_kg,
            number_of_bags,
            weight_per_unit: weight_per_unit(weight_kg, quantity),
        }
    }
}

/// Weight-per-unit ratio of a stock row; defined as 0 when quantity is 0
pub fn weight_per_unit(weight_kg: Decimal, quantity: Decimal) -> Decimal {
    if quantity.is_zero() {
        Decimal::ZERO
    } else {
        weight_kg / quantity
    }
}

/// Units-per-kg ratio of a dispatch; defined as 0 when kg is 0
pub fn units_per_kg(quantity: Decimal, kg: Decimal) -> Decimal {
    if kg.is_zero() {
        Decimal::ZERO
    } else {
        quantity / kg
    }
}

/// Apply a buy: additive update plus ratio recompute
pub fn apply_buy(totals: &mut StockTotals, quantity: Decimal, weight_kg: Decimal, bags: i32) {
    totals.quantity += quantity;
    totals.weight_kg += weight_kg;
    totals.number_of_bags += bags;
    totals.weight_per_unit = weight_per_unit(totals.weight_kg, totals.quantity);
}

/// Apply a sell: subtractive update plus ratio recompute
///
/// Negative totals are permitted so backdated corrections stay possible;
/// the only guard is on the ratio's zero denominator.
pub fn apply_sell(totals: &mut StockTotals, quantity: Decimal, kg: Decimal, bags: i32) {
    totals.quantity -= quantity;
    totals.weight_kg -= kg;
    totals.number_of_bags -= bags;
    totals.weight_per_unit = weight_per_unit(totals.weight_kg, totals.quantity);
}
