//! Derived-totals calculator.
//!
//! Pure arithmetic shared by the receiving and sales workflows. Transaction
//! rows store these values verbatim at insert time and never recompute them
//! from history, so both workflows must call this one function to keep the
//! stored totals consistent in meaning.

use serde::{Deserialize, Serialize};

/// Monetary breakdown of a transaction line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// `quantity * rate_per_unit`, before tax.
    pub sub_total: f64,
    /// Tax portion: `sub_total * tax_percentage / 100`.
    pub tax_amount: f64,
    /// `sub_total + tax_amount`.
    pub total_rate: f64,
}

/// Compute subtotal, tax amount, and grand total from quantity, unit rate,
/// and tax percentage.
///
/// No side effects and no failure modes beyond standard float semantics
/// (overflow/NaN propagate).
pub fn derived_totals(quantity: f64, rate_per_unit: f64, tax_percentage: f64) -> DerivedTotals {
    let sub_total = quantity * rate_per_unit;
    let tax_amount = sub_total * (tax_percentage / 100.0);
    let total_rate = sub_total + tax_amount;
    DerivedTotals {
        sub_total,
        tax_amount,
        total_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn ten_units_at_five_with_ten_percent_tax() {
        let totals = derived_totals(10.0, 5.0, 10.0);
        assert!(approx_eq(totals.sub_total, 50.0));
        assert!(approx_eq(totals.tax_amount, 5.0));
        assert!(approx_eq(totals.total_rate, 55.0));
    }

    #[test]
    fn zero_tax_means_total_equals_sub_total() {
        let totals = derived_totals(3.0, 7.25, 0.0);
        assert!(approx_eq(totals.sub_total, 21.75));
        assert!(approx_eq(totals.tax_amount, 0.0));
        assert!(approx_eq(totals.total_rate, totals.sub_total));
    }

    #[test]
    fn fractional_quantity() {
        let totals = derived_totals(2.5, 4.0, 18.0);
        assert!(approx_eq(totals.sub_total, 10.0));
        assert!(approx_eq(totals.tax_amount, 1.8));
        assert!(approx_eq(totals.total_rate, 11.8));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: outputs match the defining formulas within 1e-9.
            #[test]
            fn matches_defining_formulas(
                quantity in 0.001f64..10_000.0,
                rate in 0.001f64..10_000.0,
                tax in 0.0f64..100.0
            ) {
                let totals = derived_totals(quantity, rate, tax);
                prop_assert!((totals.sub_total - quantity * rate).abs() < TOLERANCE * quantity.max(1.0) * rate.max(1.0));
                prop_assert!((totals.tax_amount - quantity * rate * tax / 100.0).abs() < 1e-6);
                prop_assert!((totals.total_rate - (totals.sub_total + totals.tax_amount)).abs() < TOLERANCE);
            }

            /// Property: tax amount and total are consistent with each other.
            #[test]
            fn total_is_sub_total_plus_tax(
                quantity in 0.001f64..10_000.0,
                rate in 0.001f64..10_000.0,
                tax in 0.0f64..100.0
            ) {
                let totals = derived_totals(quantity, rate, tax);
                prop_assert_eq!(totals.total_rate, totals.sub_total + totals.tax_amount);
            }
        }
    }
}
