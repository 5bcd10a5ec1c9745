// Tax determination module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    Address, CalculationInput, CalculationResult, DeterminationPolicy, JurisdictionRate,
    JurisdictionType, TaxBreakdownLine, TaxJurisdiction, TaxPolicySettings, TaxRate,
    TransactionType,
};
pub use repositories::{MySqlTaxStore, TaxStore};
pub use services::{RateResolver, TaxCalculator, TaxService};
