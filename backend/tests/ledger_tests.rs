//! Stock ledger arithmetic tests
//!
//! Covers the buy/sell mutation invariants:
//! - totals after n buys equal the component sums, with the derived ratio
//! - a sell decrements by exactly the dispatched amounts
//! - the zero-quantity ratio guard and the negative-stock policy
//! - the two derived ratios (weight-per-unit vs units-per-kg) stay distinct

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::ledger::{apply_buy, apply_sell, units_per_kg, weight_per_unit, StockTotals};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// After n buys, totals are the component sums and the ratio is derived
    #[test]
    fn test_buys_accumulate_to_sums() {
        let buys = [
            (dec("100"), dec("50"), 4),
            (dec("50"), dec("20"), 2),
            (dec("25"), dec("12.5"), 1),
        ];

        let mut totals = StockTotals::opening(buys[0].0, buys[0].1, buys[0].2);
        for (qty, kg, bags) in &buys[1..] {
            apply_buy(&mut totals, *qty, *kg, *bags);
        }

        let sum_qty: Decimal = buys.iter().map(|b| b.0).sum();
        let sum_kg: Decimal = buys.iter().map(|b| b.1).sum();
        let sum_bags: i32 = buys.iter().map(|b| b.2).sum();

        assert_eq!(totals.quantity, sum_qty);
        assert_eq!(totals.weight_kg, sum_kg);
        assert_eq!(totals.number_of_bags, sum_bags);
        assert_eq!(totals.weight_per_unit, sum_kg / sum_qty);
    }

    /// The buy/buy/dispatch scenario: 100 units / 50 kg, then 50 / 20, then
    /// a 60 unit / 25 kg dispatch, ending at 90 units / 45 kg
    #[test]
    fn test_buy_buy_dispatch_scenario() {
        let mut totals = StockTotals::opening(dec("100"), dec("50"), 0);
        assert_eq!(totals.quantity, dec("100"));
        assert_eq!(totals.weight_kg, dec("50"));
        assert_eq!(units_per_kg(totals.quantity, totals.weight_kg), dec("2"));

        apply_buy(&mut totals, dec("50"), dec("20"), 0);
        assert_eq!(totals.quantity, dec("150"));
        assert_eq!(totals.weight_kg, dec("70"));
        let ratio = units_per_kg(totals.quantity, totals.weight_kg);
        assert!(ratio > dec("2.14") && ratio < dec("2.15"));

        apply_sell(&mut totals, dec("60"), dec("25"), 0);
        assert_eq!(totals.quantity, dec("90"));
        assert_eq!(totals.weight_kg, dec("45"));
        assert_eq!(units_per_kg(totals.quantity, totals.weight_kg), dec("2"));
        assert_eq!(totals.weight_per_unit, dec("0.5"));
    }

    /// A sell decrements by exactly the dispatched amounts and recomputes
    /// the ratio from the post-decrement totals
    #[test]
    fn test_sell_decrements_exactly() {
        let mut totals = StockTotals::opening(dec("200"), dec("80"), 10);
        apply_sell(&mut totals, dec("75"), dec("30"), 3);

        assert_eq!(totals.quantity, dec("125"));
        assert_eq!(totals.weight_kg, dec("50"));
        assert_eq!(totals.number_of_bags, 7);
        assert_eq!(totals.weight_per_unit, dec("50") / dec("125"));
    }

    /// Selling more than is on hand drives totals negative; nothing clamps
    #[test]
    fn test_oversell_goes_negative() {
        let mut totals = StockTotals::opening(dec("10"), dec("4"), 1);
        apply_sell(&mut totals, dec("25"), dec("10"), 2);

        assert_eq!(totals.quantity, dec("-15"));
        assert_eq!(totals.weight_kg, dec("-6"));
        assert_eq!(totals.number_of_bags, -1);
        // Ratio still derives from the (negative) totals
        assert_eq!(totals.weight_per_unit, dec("-6") / dec("-15"));
    }

    /// Selling down to exactly zero quantity leaves the ratio at zero
    /// rather than dividing by zero
    #[test]
    fn test_zero_quantity_ratio_is_zero() {
        let mut totals = StockTotals::opening(dec("40"), dec("16"), 2);
        apply_sell(&mut totals, dec("40"), dec("16"), 2);

        assert_eq!(totals.quantity, Decimal::ZERO);
        assert_eq!(totals.weight_per_unit, Decimal::ZERO);
    }

    /// weight-per-unit and units-per-kg are reciprocal quantities, not one
    /// field with two meanings
    #[test]
    fn test_ratio_naming_is_not_conflated() {
        let quantity = dec("60");
        let kg = dec("25");

        let wpu = weight_per_unit(kg, quantity);
        let upk = units_per_kg(quantity, kg);

        assert_eq!(upk, dec("2.4"));
        assert_ne!(wpu, upk);
        assert_eq!(wpu * upk, Decimal::ONE);
    }

    /// Both ratios define zero denominators as zero
    #[test]
    fn test_zero_denominator_guards() {
        assert_eq!(weight_per_unit(dec("5"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(units_per_kg(dec("5"), Decimal::ZERO), Decimal::ZERO);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating positive quantities
    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000i64).prop_map(|n| Decimal::new(n, 1)) // 0.1 to 10000.0
    }

    /// Strategy for generating bag counts
    fn bags_strategy() -> impl Strategy<Value = i32> {
        0i32..=500
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Totals after any sequence of buys equal the component sums
        #[test]
        fn prop_buy_sequence_sums(
            buys in prop::collection::vec(
                (quantity_strategy(), quantity_strategy(), bags_strategy()),
                1..15
            )
        ) {
            let mut totals = StockTotals::opening(buys[0].0, buys[0].1, buys[0].2);
            for (qty, kg, bags) in &buys[1..] {
                apply_buy(&mut totals, *qty, *kg, *bags);
            }

            let sum_qty: Decimal = buys.iter().map(|b| b.0).sum();
            let sum_kg: Decimal = buys.iter().map(|b| b.1).sum();
            let sum_bags: i32 = buys.iter().map(|b| b.2).sum();

            prop_assert_eq!(totals.quantity, sum_qty);
            prop_assert_eq!(totals.weight_kg, sum_kg);
            prop_assert_eq!(totals.number_of_bags, sum_bags);
        }

        /// The derived ratio always equals weight / quantity after any
        /// buy/sell sequence, or zero when quantity ends at zero
        #[test]
        fn prop_ratio_always_derived(
            opening in (quantity_strategy(), quantity_strategy(), bags_strategy()),
            moves in prop::collection::vec(
                (any::<bool>(), quantity_strategy(), quantity_strategy(), bags_strategy()),
                0..15
            )
        ) {
            let mut totals = StockTotals::opening(opening.0, opening.1, opening.2);
            for (is_buy, qty, kg, bags) in &moves {
                if *is_buy {
                    apply_buy(&mut totals, *qty, *kg, *bags);
                } else {
                    apply_sell(&mut totals, *qty, *kg, *bags);
                }
            }

            if totals.quantity.is_zero() {
                prop_assert_eq!(totals.weight_per_unit, Decimal::ZERO);
            } else {
                prop_assert_eq!(totals.weight_per_unit, totals.weight_kg / totals.quantity);
            }
        }

        /// A buy followed by an identical sell restores the original totals
        #[test]
        fn prop_buy_then_sell_roundtrip(
            opening in (quantity_strategy(), quantity_strategy(), bags_strategy()),
            movement in (quantity_strategy(), quantity_strategy(), bags_strategy())
        ) {
            let original = StockTotals::opening(opening.0, opening.1, opening.2);
            let mut totals = original.clone();

            apply_buy(&mut totals, movement.0, movement.1, movement.2);
            apply_sell(&mut totals, movement.0, movement.1, movement.2);

            prop_assert_eq!(totals.quantity, original.quantity);
            prop_assert_eq!(totals.weight_kg, original.weight_kg);
            prop_assert_eq!(totals.number_of_bags, original.number_of_bags);
        }

        /// Buys commute: order never changes the final totals
        #[test]
        fn prop_buys_commute(
            opening in (quantity_strategy(), quantity_strategy(), bags_strategy()),
            a in (quantity_strategy(), quantity_strategy(), bags_strategy()),
            b in (quantity_strategy(), quantity_strategy(), bags_strategy())
        ) {
            let mut ab = StockTotals::opening(opening.0, opening.1, opening.2);
            apply_buy(&mut ab, a.0, a.1, a.2);
            apply_buy(&mut ab, b.0, b.1, b.2);

            let mut ba = StockTotals::opening(opening.0, opening.1, opening.2);
            apply_buy(&mut ba, b.0, b.1, b.2);
            apply_buy(&mut ba, a.0, a.1, a.2);

            prop_assert_eq!(ab, ba);
        }

        /// The two derived ratios are reciprocals for any positive movement
        #[test]
        fn prop_ratios_are_reciprocal(
            quantity in quantity_strategy(),
            kg in quantity_strategy()
        ) {
            let wpu = weight_per_unit(kg, quantity);
            let upk = units_per_kg(quantity, kg);

            let product = wpu * upk;
            let tolerance = dec("0.0000001");
            prop_assert!((product - Decimal::ONE).abs() < tolerance);
        }
    }
}
