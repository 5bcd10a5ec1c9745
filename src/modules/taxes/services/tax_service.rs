use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{round_money, Result};
use crate::modules::taxes::models::{CalculationInput, CalculationResult};
use crate::modules::taxes::repositories::TaxStore;
use crate::modules::taxes::services::{BreakdownBuilder, RateResolver, TaxCalculator};

/// Public entry point: resolves rates, runs the calculation, and assembles
/// the ledger-ready result.
///
/// Stateless and side-effect-free apart from the resolver's store reads; any
/// number of calls may run concurrently.
pub struct TaxService {
    resolver: RateResolver,
    calculator: TaxCalculator,
}

impl TaxService {
    pub fn new(store: Arc<dyn TaxStore>) -> Self {
        Self {
            resolver: RateResolver::new(store),
            calculator: TaxCalculator::new(),
        }
    }

    /// Calculate the tax owed on one transaction.
    pub async fn calculate_tax(&self, input: &CalculationInput) -> Result<CalculationResult> {
        input.validate()?;

        let resolved = self
            .resolver
            .resolve(
                input.transaction_type,
                &input.origin_address,
                &input.destination_address,
            )
            .await?;

        let computation =
            self.calculator
                .calculate(input.amount, &resolved.rates, input.is_tax_inclusive)?;

        let breakdown = BreakdownBuilder::build(&computation.per_rate, &resolved.provenance);

        let subtotal = round_money(computation.subtotal);
        let total_tax = round_money(computation.total_tax);
        let total_amount = round_money(subtotal + total_tax);

        let distributed: Decimal = breakdown.iter().map(|line| line.tax_amount).sum();
        if (distributed - total_tax).abs() > Decimal::new(1, 2) {
            warn!(
                "Per-rate rounding drift exceeds one cent: distributed {} vs total {}",
                distributed, total_tax
            );
        }

        info!(
            "Tax calculated: subtotal={}, tax={}, total={} ({})",
            subtotal, total_tax, total_amount, resolved.provenance
        );

        Ok(CalculationResult {
            subtotal,
            total_tax,
            total_amount,
            breakdown,
        })
    }
}
