use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::config::DatabaseConfig;
use crate::core::{Result, TaxError};
use crate::modules::taxes::models::{
    JurisdictionRate, TaxJurisdiction, TaxPolicySettings, TaxRate, TransactionType,
};

/// Read-only port to the external rate/jurisdiction/settings store.
///
/// The engine never writes through this port; implementations only need to
/// support concurrent reads.
#[async_trait]
pub trait TaxStore: Send + Sync {
    /// Fetch the policy singleton. `Ok(None)` means no row exists yet and the
    /// caller applies the default policy.
    async fn load_policy_settings(&self) -> Result<Option<TaxPolicySettings>>;

    /// Fetch active jurisdictions for a country, each joined with its active
    /// rate matching the transaction type, ordered ascending by jurisdiction
    /// type name.
    async fn find_jurisdiction_rates(
        &self,
        country_code: &str,
        transaction_type: TransactionType,
    ) -> Result<Vec<JurisdictionRate>>;

    /// Fetch a rate by id, filtered on activity and transaction type.
    /// `Ok(None)` when the reference does not resolve.
    async fn find_active_rate(
        &self,
        rate_id: i64,
        transaction_type: TransactionType,
    ) -> Result<Option<TaxRate>>;
}

/// MySQL-backed tax store
pub struct MySqlTaxStore {
    pool: MySqlPool,
}

impl MySqlTaxStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect a store from environment-driven configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        Ok(Self::new(config.create_pool().await?))
    }
}

#[derive(sqlx::FromRow)]
struct PolicySettingsRow {
    determination_policy: String,
    default_tax_rate_id: Option<i64>,
}

#[derive(sqlx::FromRow)]
struct JurisdictionRateRow {
    jurisdiction_id: i64,
    jurisdiction_name: String,
    jurisdiction_type: String,
    country_code: String,
    tax_rate_id: i64,
    rate_name: String,
    rate: Decimal,
    is_compound: bool,
    liability_account_ref: String,
    transaction_type: String,
}

impl JurisdictionRateRow {
    /// Promote the loosely-typed row to strict DTOs, failing fast on
    /// unparseable enum columns instead of propagating gaps.
    fn into_jurisdiction_rate(self) -> Result<JurisdictionRate> {
        let jurisdiction_type = self.jurisdiction_type.parse().map_err(|e: String| {
            TaxError::data_source(format!(
                "Jurisdiction {}: {}",
                self.jurisdiction_id, e
            ))
        })?;
        let transaction_type = self.transaction_type.parse().map_err(|e: String| {
            TaxError::data_source(format!("Tax rate {}: {}", self.tax_rate_id, e))
        })?;

        Ok(JurisdictionRate {
            jurisdiction: TaxJurisdiction {
                id: self.jurisdiction_id,
                name: self.jurisdiction_name,
                jurisdiction_type,
                country_code: self.country_code,
                is_active: true,
                tax_rate_id: self.tax_rate_id,
            },
            rate: TaxRate {
                id: self.tax_rate_id,
                name: self.rate_name,
                rate: self.rate,
                is_compound: self.is_compound,
                liability_account_ref: self.liability_account_ref,
                transaction_type,
                is_active: true,
            },
        })
    }
}

#[async_trait]
impl TaxStore for MySqlTaxStore {
    async fn load_policy_settings(&self) -> Result<Option<TaxPolicySettings>> {
        let row = sqlx::query_as::<_, PolicySettingsRow>(
            r#"
            SELECT determination_policy, default_tax_rate_id
            FROM tax_policy_settings
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let determination_policy = r.determination_policy.parse().map_err(|e: String| {
                TaxError::data_source(format!("Tax policy settings: {}", e))
            })?;
            Ok(TaxPolicySettings {
                determination_policy,
                default_tax_rate_id: r.default_tax_rate_id,
            })
        })
        .transpose()
    }

    async fn find_jurisdiction_rates(
        &self,
        country_code: &str,
        transaction_type: TransactionType,
    ) -> Result<Vec<JurisdictionRate>> {
        let rows = sqlx::query_as::<_, JurisdictionRateRow>(
            r#"
            SELECT j.id AS jurisdiction_id, j.name AS jurisdiction_name,
                   j.jurisdiction_type, j.country_code,
                   r.id AS tax_rate_id, r.name AS rate_name, r.rate,
                   r.is_compound, r.liability_account_ref, r.transaction_type
            FROM tax_jurisdictions j
            INNER JOIN tax_rates r ON r.id = j.tax_rate_id
            WHERE j.is_active = TRUE
              AND j.country_code = ?
              AND r.is_active = TRUE
              AND r.transaction_type = ?
            ORDER BY j.jurisdiction_type ASC, j.name ASC
            "#,
        )
        .bind(country_code)
        .bind(transaction_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(JurisdictionRateRow::into_jurisdiction_rate)
            .collect()
    }

    async fn find_active_rate(
        &self,
        rate_id: i64,
        transaction_type: TransactionType,
    ) -> Result<Option<TaxRate>> {
        let rate = sqlx::query_as::<_, TaxRate>(
            r#"
            SELECT id, name, rate, is_compound, liability_account_ref,
                   transaction_type, is_active
            FROM tax_rates
            WHERE id = ? AND is_active = TRUE AND transaction_type = ?
            "#,
        )
        .bind(rate_id)
        .bind(transaction_type.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(rate)
    }
}
