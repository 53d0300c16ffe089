//! Wire-format request types and their validation.
//!
//! The service layer posts JSON bodies with `income`, `tax_brackets` as
//! `[rate, threshold]` pairs, and `investment_data` in the shape the invoked
//! operation expects. Raw records carry optional fields; validation converts
//! each missing required key into a named [`EngineError`] instead of an
//! unchecked fault. Unknown upstream keys (the brokerage feed sends many)
//! are ignored.

use crate::core::{
    Account, EngineError, Holding, InvestmentData, Security, TaxBracket, TaxEngine, Transaction,
    TransactionKind,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Deserialize;
use std::io::Read;

/// Request body for gain and tax computation: income, an ordered bracket
/// table, and flat holdings.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TaxComputationRequest {
    /// Annual income. Non-negative by caller contract.
    #[serde(default)]
    #[schemars(with = "f64")]
    pub income: Decimal,
    /// Ordered `[rate, threshold]` pairs, applied in the order given.
    #[serde(default)]
    #[schemars(with = "Vec<(f64, f64)>")]
    pub tax_brackets: Vec<TaxBracket>,
    #[serde(default)]
    pub investment_data: Vec<RawHolding>,
}

impl TaxComputationRequest {
    /// Validate the holdings and build the engine snapshot.
    pub fn into_engine(self) -> Result<TaxEngine, EngineError> {
        let holdings = validate_holdings(self.investment_data)?;
        Ok(TaxEngine::new(
            self.income,
            InvestmentData::Holdings(holdings),
            self.tax_brackets,
        ))
    }
}

/// Request body for harvesting suggestions: accounts with per-security
/// transaction history.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HarvestRequest {
    #[serde(default)]
    pub investment_data: Vec<RawAccount>,
}

impl HarvestRequest {
    /// Validate the accounts and build the engine snapshot. Income and
    /// brackets play no part in harvesting.
    pub fn into_engine(self) -> Result<TaxEngine, EngineError> {
        let accounts = validate_accounts(self.investment_data)?;
        Ok(TaxEngine::new(
            Decimal::ZERO,
            InvestmentData::Accounts(accounts),
            Vec::new(),
        ))
    }
}

/// Holding as supplied by the brokerage feed.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RawHolding {
    #[serde(default)]
    pub security: Option<String>,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub current_value: Option<Decimal>,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub cost_basis: Option<Decimal>,
}

impl RawHolding {
    fn validate(self) -> Result<Holding, EngineError> {
        let current_value = self
            .current_value
            .ok_or(EngineError::MalformedHolding {
                field: "current_value",
            })?;
        let cost_basis = self.cost_basis.ok_or(EngineError::MalformedHolding {
            field: "cost_basis",
        })?;
        Ok(Holding {
            security: self.security,
            current_value,
            cost_basis,
        })
    }
}

/// Account as supplied by the brokerage feed. A missing `securities` array
/// is an empty account, not an error.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RawAccount {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub securities: Vec<RawSecurity>,
}

impl RawAccount {
    fn validate(self) -> Result<Account, EngineError> {
        let securities = self
            .securities
            .into_iter()
            .map(RawSecurity::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Account {
            name: self.name,
            securities,
        })
    }
}

/// Security as supplied by the brokerage feed. The name is required; a
/// missing `transactions` array is an empty history.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RawSecurity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
}

impl RawSecurity {
    fn validate(self) -> Result<Security, EngineError> {
        let name = self
            .name
            .ok_or(EngineError::MalformedSecurity { field: "name" })?;
        let transactions = self
            .transactions
            .into_iter()
            .map(|tx| tx.validate(&name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Security { name, transactions })
    }
}

/// Transaction as supplied by the brokerage feed.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RawTransaction {
    /// Transaction type string; only `"sell"` participates in loss
    /// computation, any other value is non-matching.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub cost_basis: Option<Decimal>,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub price: Option<Decimal>,
    /// Trade date, when the brokerage supplies one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl RawTransaction {
    fn validate(self, security: &str) -> Result<Transaction, EngineError> {
        let malformed = |field: &'static str| EngineError::MalformedTransaction {
            security: security.to_string(),
            field,
        };

        let kind_str = self.kind.ok_or_else(|| malformed("type"))?;
        let kind = TransactionKind::from_type_str(&kind_str);

        // Amounts are only ever read on sells; the upstream feed may omit
        // them elsewhere, so absence is only a fault on a sell.
        let (cost_basis, price) = if kind == TransactionKind::Sell {
            (
                self.cost_basis.ok_or_else(|| malformed("cost_basis"))?,
                self.price.ok_or_else(|| malformed("price"))?,
            )
        } else {
            (
                self.cost_basis.unwrap_or_default(),
                self.price.unwrap_or_default(),
            )
        };

        Ok(Transaction {
            kind,
            cost_basis,
            price,
            date: self.date,
        })
    }
}

/// Validate raw holdings into the core record, failing on the first
/// missing required field.
pub fn validate_holdings(raw: Vec<RawHolding>) -> Result<Vec<Holding>, EngineError> {
    raw.into_iter().map(RawHolding::validate).collect()
}

/// Validate raw accounts (and their securities and transactions) into the
/// core records.
pub fn validate_accounts(raw: Vec<RawAccount>) -> Result<Vec<Account>, EngineError> {
    raw.into_iter().map(RawAccount::validate).collect()
}

/// Read a tax computation request from JSON.
pub fn read_tax_request_json<R: Read>(reader: R) -> anyhow::Result<TaxComputationRequest> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a harvesting request from JSON.
pub fn read_harvest_request_json<R: Read>(reader: R) -> anyhow::Result<HarvestRequest> {
    Ok(serde_json::from_reader(reader)?)
}
