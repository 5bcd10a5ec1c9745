use rust_decimal::Decimal;

use crate::modules::taxes::models::TaxBreakdownLine;
use crate::modules::taxes::services::tax_calculator::RateTax;

/// Projects the engine's per-rate figures into the public breakdown.
///
/// Pure projection: attaches provenance and ledger references, performs no
/// tax arithmetic.
pub struct BreakdownBuilder;

impl BreakdownBuilder {
    /// Assemble breakdown lines in calculation order, tagging each with the
    /// resolver provenance suffixed by the pricing basis it was computed on.
    pub fn build(per_rate: &[RateTax], provenance: &str) -> Vec<TaxBreakdownLine> {
        per_rate
            .iter()
            .map(|entry| TaxBreakdownLine {
                rate_id: entry.rate.id,
                rate_name: entry.rate.name.clone(),
                rate_percentage: entry.rate.rate * Decimal::ONE_HUNDRED,
                tax_amount: entry.tax_amount,
                is_compound: entry.rate.is_compound,
                liability_account_ref: entry.rate.liability_account_ref.clone(),
                applied_rule: format!("{} {}", provenance, entry.basis.suffix()),
            })
            .collect()
    }
}
