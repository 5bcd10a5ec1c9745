// Engine input and output types.
//
// A CalculationInput/CalculationResult pair lives for the duration of one
// call; nothing survives between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Result, TaxError};

use super::TransactionType;

/// Party address used for jurisdiction matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country_code: String,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl Address {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            state: None,
            city: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

/// Caller-supplied input for one tax calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Subtotal when tax-exclusive, final total when tax-inclusive
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub origin_address: Address,
    pub destination_address: Address,
    pub is_tax_inclusive: bool,
}

impl CalculationInput {
    /// Reject inputs the engine must not compute on
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(TaxError::validation(format!(
                "Amount must be non-negative, got: {}",
                self.amount
            )));
        }

        Ok(())
    }
}

/// Pricing basis a tax figure was computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxBasis {
    Exclusive,
    Inclusive,
    CompoundExclusive,
}

impl TaxBasis {
    /// Suffix appended to the resolver provenance in `applied_rule`
    pub fn suffix(&self) -> &'static str {
        match self {
            TaxBasis::Exclusive => "(Exclusive Basis)",
            TaxBasis::Inclusive => "(Inclusive Basis)",
            TaxBasis::CompoundExclusive => "(Compound Exclusive Basis)",
        }
    }
}

/// One tax line of the final breakdown, ready for ledger posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdownLine {
    pub rate_id: i64,
    pub rate_name: String,
    /// Rate expressed as a percentage (fraction × 100)
    pub rate_percentage: Decimal,
    pub tax_amount: Decimal,
    pub is_compound: bool,
    pub liability_account_ref: String,
    /// Provenance of the selection plus the pricing basis applied
    pub applied_rule: String,
}

/// Final result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    pub total_amount: Decimal,
    /// Ordered as calculated: non-compound rates first, then compound rates
    pub breakdown: Vec<TaxBreakdownLine>,
}
