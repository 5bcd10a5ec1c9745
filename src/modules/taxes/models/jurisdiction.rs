use serde::{Deserialize, Serialize};
use std::fmt;

use super::TaxRate;

/// Kind of geographic scope a jurisdiction covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JurisdictionType {
    State,
    City,
    County,
    District,
    Other,
}

impl JurisdictionType {
    /// String form used by the store and by the resolver's alphabetical scan
    pub fn as_str(&self) -> &'static str {
        match self {
            JurisdictionType::State => "State",
            JurisdictionType::City => "City",
            JurisdictionType::County => "County",
            JurisdictionType::District => "District",
            JurisdictionType::Other => "Other",
        }
    }
}

impl fmt::Display for JurisdictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JurisdictionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "state" => Ok(JurisdictionType::State),
            "city" => Ok(JurisdictionType::City),
            "county" => Ok(JurisdictionType::County),
            "district" => Ok(JurisdictionType::District),
            "other" => Ok(JurisdictionType::Other),
            _ => Err(format!("Unrecognized jurisdiction type: {}", s)),
        }
    }
}

impl TryFrom<String> for JurisdictionType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A named geographic scope linked one-to-one with a tax rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxJurisdiction {
    pub id: i64,
    pub name: String,
    pub jurisdiction_type: JurisdictionType,
    pub country_code: String,
    pub is_active: bool,
    pub tax_rate_id: i64,
}

/// Store-boundary row: a jurisdiction joined with its linked rate
#[derive(Debug, Clone, PartialEq)]
pub struct JurisdictionRate {
    pub jurisdiction: TaxJurisdiction,
    pub rate: TaxRate,
}
