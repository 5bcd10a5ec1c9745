use rust_decimal::Decimal;

use crate::core::{round_money, Result, TaxError};
use crate::modules::taxes::models::{TaxBasis, TaxRate};

/// Tax computed for one rate, before breakdown assembly
#[derive(Debug, Clone, PartialEq)]
pub struct RateTax {
    pub rate: TaxRate,
    pub tax_amount: Decimal,
    pub basis: TaxBasis,
}

/// Raw output of the calculation engine
#[derive(Debug, Clone, PartialEq)]
pub struct TaxComputation {
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    /// Ordered as calculated: non-compound rates first, then compound rates
    pub per_rate: Vec<RateTax>,
}

/// Computes subtotal, total tax, and per-rate amounts from resolved rates.
///
/// Pure and synchronous: no I/O, no state between calls.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate tax for an amount against the resolved rate set.
    ///
    /// In exclusive mode the amount is the subtotal and tax is added on top;
    /// in inclusive mode the amount is the final total and the pre-tax base
    /// is derived by division.
    pub fn calculate(
        &self,
        amount: Decimal,
        rates: &[TaxRate],
        is_tax_inclusive: bool,
    ) -> Result<TaxComputation> {
        if amount < Decimal::ZERO {
            return Err(TaxError::validation(format!(
                "Amount must be non-negative, got: {}",
                amount
            )));
        }

        let (non_compound, compound): (Vec<&TaxRate>, Vec<&TaxRate>) =
            rates.iter().partition(|r| !r.is_compound);

        if is_tax_inclusive {
            self.calculate_inclusive(amount, &non_compound, &compound)
        } else {
            Ok(self.calculate_exclusive(amount, &non_compound, &compound))
        }
    }

    fn calculate_exclusive(
        &self,
        subtotal: Decimal,
        non_compound: &[&TaxRate],
        compound: &[&TaxRate],
    ) -> TaxComputation {
        let mut per_rate = Vec::with_capacity(non_compound.len() + compound.len());
        let mut current_tax = Decimal::ZERO;

        for rate in non_compound {
            let tax = round_money(subtotal * rate.rate);
            current_tax += tax;
            per_rate.push(RateTax {
                rate: (*rate).clone(),
                tax_amount: tax,
                basis: TaxBasis::Exclusive,
            });
        }

        // Every compound rate reads the same base of subtotal plus all
        // non-compound tax; compound rates do not compound upon each other.
        let compound_base = subtotal + current_tax;
        for rate in compound {
            let tax = round_money(compound_base * rate.rate);
            current_tax += tax;
            per_rate.push(RateTax {
                rate: (*rate).clone(),
                tax_amount: tax,
                basis: TaxBasis::CompoundExclusive,
            });
        }

        TaxComputation {
            subtotal,
            total_tax: current_tax,
            per_rate,
        }
    }

    fn calculate_inclusive(
        &self,
        amount: Decimal,
        non_compound: &[&TaxRate],
        compound: &[&TaxRate],
    ) -> Result<TaxComputation> {
        if !compound.is_empty() {
            return Err(TaxError::validation(
                "Compound tax rates cannot be combined with tax-inclusive pricing",
            ));
        }

        let total_rate: Decimal = non_compound.iter().map(|r| r.rate).sum();
        if total_rate.is_zero() {
            return Ok(TaxComputation {
                subtotal: amount,
                total_tax: Decimal::ZERO,
                per_rate: Vec::new(),
            });
        }

        let subtotal = round_money(amount / (Decimal::ONE + total_rate));
        let total_tax = amount - subtotal;

        // Each rate takes its proportional share of the derived total tax
        let per_rate = non_compound
            .iter()
            .map(|rate| RateTax {
                rate: (*rate).clone(),
                tax_amount: round_money(total_tax * (rate.rate / total_rate)),
                basis: TaxBasis::Inclusive,
            })
            .collect();

        Ok(TaxComputation {
            subtotal,
            total_tax,
            per_rate,
        })
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
