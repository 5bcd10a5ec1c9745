use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the seller's or the buyer's address governs rate selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeterminationPolicy {
    Origin,
    Destination,
}

impl DeterminationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeterminationPolicy::Origin => "Origin",
            DeterminationPolicy::Destination => "Destination",
        }
    }
}

impl fmt::Display for DeterminationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeterminationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "origin" => Ok(DeterminationPolicy::Origin),
            "destination" => Ok(DeterminationPolicy::Destination),
            _ => Err(format!("Unrecognized determination policy: {}", s)),
        }
    }
}

impl TryFrom<String> for DeterminationPolicy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Singleton policy record owned by the administration layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicySettings {
    pub determination_policy: DeterminationPolicy,
    pub default_tax_rate_id: Option<i64>,
}

impl Default for TaxPolicySettings {
    /// Policy applied when the store has no settings row yet
    fn default() -> Self {
        Self {
            determination_policy: DeterminationPolicy::Destination,
            default_tax_rate_id: None,
        }
    }
}
