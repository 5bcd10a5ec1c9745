use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{Result, TaxError};
use crate::modules::taxes::models::{
    Address, DeterminationPolicy, JurisdictionType, TaxRate, TransactionType,
};
use crate::modules::taxes::repositories::TaxStore;

/// Rates selected for one calculation, with the rule that selected them
#[derive(Debug, Clone)]
pub struct ResolvedRates {
    pub rates: Vec<TaxRate>,
    pub provenance: String,
}

/// Selects the applicable tax rates for a transaction from jurisdiction and
/// policy data read through the store port.
pub struct RateResolver {
    store: Arc<dyn TaxStore>,
}

impl RateResolver {
    pub fn new(store: Arc<dyn TaxStore>) -> Self {
        Self { store }
    }

    /// Resolve the ordered set of rates applicable to a transaction.
    ///
    /// Candidate jurisdictions are scanned ascending by jurisdiction type
    /// name and the first city or state whose name equals the relevant
    /// address field wins. With no match, the configured global default rate
    /// applies; with no default either, the result is an empty set — a valid
    /// zero-tax outcome, not an error.
    pub async fn resolve(
        &self,
        transaction_type: TransactionType,
        origin: &Address,
        destination: &Address,
    ) -> Result<ResolvedRates> {
        let settings = self.store.load_policy_settings().await?.unwrap_or_default();

        let relevant = match settings.determination_policy {
            DeterminationPolicy::Destination => destination,
            DeterminationPolicy::Origin => origin,
        };

        let mut candidates = self
            .store
            .find_jurisdiction_rates(&relevant.country_code, transaction_type)
            .await?;
        // Stable sort: store order is kept within a jurisdiction type
        candidates.sort_by(|a, b| {
            a.jurisdiction
                .jurisdiction_type
                .as_str()
                .cmp(b.jurisdiction.jurisdiction_type.as_str())
        });

        let matched = candidates.into_iter().find(|candidate| {
            let jurisdiction = &candidate.jurisdiction;
            match jurisdiction.jurisdiction_type {
                JurisdictionType::City => {
                    relevant.city.as_deref() == Some(jurisdiction.name.as_str())
                }
                JurisdictionType::State => {
                    relevant.state.as_deref() == Some(jurisdiction.name.as_str())
                }
                _ => false,
            }
        });

        if let Some(candidate) = matched {
            info!(
                "Resolved rate {} via jurisdiction {} ({})",
                candidate.rate.name,
                candidate.jurisdiction.name,
                candidate.jurisdiction.jurisdiction_type
            );
            return Ok(ResolvedRates {
                provenance: format!("Matched Jurisdiction: {}", candidate.jurisdiction.name),
                rates: vec![candidate.rate],
            });
        }

        if let Some(default_id) = settings.default_tax_rate_id {
            let rate = self
                .store
                .find_active_rate(default_id, transaction_type)
                .await?
                .ok_or_else(|| {
                    TaxError::configuration(format!(
                        "Default tax rate {} does not resolve to an active {} rate",
                        default_id, transaction_type
                    ))
                })?;
            info!("Resolved global default rate {}", rate.name);
            return Ok(ResolvedRates {
                provenance: "Applied Global Default Rate.".to_string(),
                rates: vec![rate],
            });
        }

        debug!(
            "No tax rule matched for {} transaction in {}",
            transaction_type, relevant.country_code
        );
        Ok(ResolvedRates {
            rates: Vec::new(),
            provenance: "No match found.".to_string(),
        })
    }
}
