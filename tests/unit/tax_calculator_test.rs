// Property-based tests for the calculation engine.
//
// Validates:
// - Determinism: identical inputs yield identical computations
// - Exclusive mode: total tax equals the sum of per-rate figures
// - Inclusive mode: subtotal + total tax reconstructs the amount exactly
// - Per-rate rounding drift stays within one cent
// - Empty rate set is a valid zero-tax outcome in both modes

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use taxpoint::core::round_money;
use taxpoint::taxes::models::{TaxRate, TransactionType};
use taxpoint::taxes::services::TaxCalculator;

fn rate(id: i64, fraction: Decimal, compound: bool) -> TaxRate {
    TaxRate {
        id,
        name: format!("Rate {}", id),
        rate: fraction,
        is_compound: compound,
        liability_account_ref: format!("2150-{}", id),
        transaction_type: TransactionType::Sales,
        is_active: true,
    }
}

fn amount_from_cents(cents: u64) -> Decimal {
    Decimal::from(cents) / Decimal::from(100)
}

fn rate_from_basis_points(basis_points: u32) -> Decimal {
    Decimal::from(basis_points) / Decimal::from(10_000)
}

proptest! {
    #[test]
    fn test_calculation_is_deterministic(
        amount_cents in 0u64..100_000_000u64,
        rate_bp in 0u32..=2_500u32,
        compound_bp in 0u32..=1_000u32
    ) {
        let calculator = TaxCalculator::new();
        let amount = amount_from_cents(amount_cents);
        let rates = vec![
            rate(1, rate_from_basis_points(rate_bp), false),
            rate(2, rate_from_basis_points(compound_bp), true),
        ];

        let first = calculator.calculate(amount, &rates, false).unwrap();
        let second = calculator.calculate(amount, &rates, false).unwrap();

        prop_assert_eq!(first, second, "Calculation must be deterministic");
    }

    #[test]
    fn test_exclusive_total_tax_is_sum_of_per_rate_figures(
        amount_cents in 0u64..100_000_000u64,
        simple_bp in 0u32..=2_500u32,
        compound_bp in 0u32..=1_000u32
    ) {
        let calculator = TaxCalculator::new();
        let amount = amount_from_cents(amount_cents);
        let rates = vec![
            rate(1, rate_from_basis_points(simple_bp), false),
            rate(2, rate_from_basis_points(compound_bp), true),
        ];

        let result = calculator.calculate(amount, &rates, false).unwrap();

        let sum: Decimal = result.per_rate.iter().map(|r| r.tax_amount).sum();
        prop_assert_eq!(result.total_tax, sum);
        prop_assert_eq!(result.subtotal, amount, "Exclusive amount is the subtotal");
    }

    #[test]
    fn test_inclusive_reconstructs_amount_exactly(
        amount_cents in 1u64..100_000_000u64,
        rate_bp in 1u32..=2_500u32
    ) {
        let calculator = TaxCalculator::new();
        let amount = amount_from_cents(amount_cents);
        let rates = vec![rate(1, rate_from_basis_points(rate_bp), false)];

        let result = calculator.calculate(amount, &rates, true).unwrap();

        prop_assert_eq!(
            round_money(result.subtotal + result.total_tax),
            amount,
            "Inclusive subtotal + tax must reconstruct the given amount"
        );
    }

    #[test]
    fn test_inclusive_breakdown_drift_within_one_cent(
        amount_cents in 1u64..100_000_000u64,
        first_bp in 1u32..=2_500u32,
        second_bp in 1u32..=2_500u32
    ) {
        let calculator = TaxCalculator::new();
        let amount = amount_from_cents(amount_cents);
        let rates = vec![
            rate(1, rate_from_basis_points(first_bp), false),
            rate(2, rate_from_basis_points(second_bp), false),
        ];

        let result = calculator.calculate(amount, &rates, true).unwrap();

        let distributed: Decimal = result.per_rate.iter().map(|r| r.tax_amount).sum();
        let drift = (distributed - result.total_tax).abs();
        prop_assert!(
            drift <= dec!(0.01),
            "Per-rate rounding drift {} exceeds one cent",
            drift
        );
    }

    #[test]
    fn test_tax_is_non_negative(
        amount_cents in 0u64..100_000_000u64,
        rate_bp in 0u32..=2_500u32,
        inclusive in proptest::bool::ANY
    ) {
        let calculator = TaxCalculator::new();
        let amount = amount_from_cents(amount_cents);
        let rates = vec![rate(1, rate_from_basis_points(rate_bp), false)];

        let result = calculator.calculate(amount, &rates, inclusive).unwrap();

        prop_assert!(result.total_tax >= Decimal::ZERO);
        prop_assert!(result.subtotal >= Decimal::ZERO);
    }

    #[test]
    fn test_empty_rate_set_is_zero_tax_in_both_modes(
        amount_cents in 0u64..100_000_000u64,
        inclusive in proptest::bool::ANY
    ) {
        let calculator = TaxCalculator::new();
        let amount = amount_from_cents(amount_cents);

        let result = calculator.calculate(amount, &[], inclusive).unwrap();

        prop_assert_eq!(result.total_tax, Decimal::ZERO);
        prop_assert_eq!(result.subtotal, amount);
        prop_assert!(result.per_rate.is_empty());
    }
}

#[test]
fn test_two_simple_rates_each_apply_to_the_base() {
    // Scenario: 100.00 at 5% and 3% simple rates
    let calculator = TaxCalculator::new();
    let rates = vec![rate(1, dec!(0.05), false), rate(2, dec!(0.03), false)];

    let result = calculator.calculate(dec!(100.00), &rates, false).unwrap();

    assert_eq!(result.per_rate[0].tax_amount, dec!(5.00));
    assert_eq!(result.per_rate[1].tax_amount, dec!(3.00));
    assert_eq!(result.total_tax, dec!(8.00));
    assert_eq!(result.subtotal + result.total_tax, dec!(108.00));
}

#[test]
fn test_simple_plus_compound_rate_ordering() {
    // Scenario: 100.00 at 10% simple plus 5% compound; the compound rate
    // reads a base of 110.00
    let calculator = TaxCalculator::new();
    let rates = vec![rate(1, dec!(0.10), false), rate(2, dec!(0.05), true)];

    let result = calculator.calculate(dec!(100.00), &rates, false).unwrap();

    assert_eq!(result.per_rate[0].tax_amount, dec!(10.00));
    assert_eq!(result.per_rate[1].tax_amount, dec!(5.50));
    assert_eq!(result.total_tax, dec!(15.50));
    assert_eq!(result.subtotal + result.total_tax, dec!(115.50));
}

#[test]
fn test_inclusive_distribution_across_two_rates() {
    // 108.00 inclusive of 5% and 3%: base 100.00, shares 5.00 and 3.00
    let calculator = TaxCalculator::new();
    let rates = vec![rate(1, dec!(0.05), false), rate(2, dec!(0.03), false)];

    let result = calculator.calculate(dec!(108.00), &rates, true).unwrap();

    assert_eq!(result.subtotal, dec!(100.00));
    assert_eq!(result.total_tax, dec!(8.00));
    assert_eq!(result.per_rate[0].tax_amount, dec!(5.00));
    assert_eq!(result.per_rate[1].tax_amount, dec!(3.00));
}
