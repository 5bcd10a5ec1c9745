use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of transaction a tax rate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Sales,
    Purchase,
}

impl TransactionType {
    /// String form used by the store
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sales => "Sales",
            TransactionType::Purchase => "Purchase",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(TransactionType::Sales),
            "purchase" => Ok(TransactionType::Purchase),
            _ => Err(format!("Unrecognized transaction type: {}", s)),
        }
    }
}

impl TryFrom<String> for TransactionType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A tax rate as maintained by the administration layer.
///
/// The `rate` fraction is read verbatim; the engine performs no normalization
/// or clamping (data quality is owned by the store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaxRate {
    pub id: i64,
    pub name: String,
    pub rate: Decimal,
    pub is_compound: bool,
    /// Opaque reference to the ledger account this tax line posts to
    pub liability_account_ref: String,
    #[sqlx(try_from = "String")]
    pub transaction_type: TransactionType,
    pub is_active: bool,
}
