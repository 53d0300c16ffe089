use super::brackets::TaxBracket;
use super::error::EngineError;
use super::portfolio::{Account, Holding};
use rust_decimal::Decimal;
use serde::Serialize;

/// Investment data snapshot held by the engine.
///
/// The expected shape depends on the operation invoked: gain and tax
/// computation read flat holdings, harvesting suggestions read the nested
/// account structure. Invoking an operation against the other variant is a
/// precondition violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentData {
    Holdings(Vec<Holding>),
    Accounts(Vec<Account>),
}

impl Default for InvestmentData {
    fn default() -> Self {
        InvestmentData::Holdings(Vec::new())
    }
}

/// A tax-loss harvesting candidate: a security whose sell history realized a
/// net loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestSuggestion {
    pub security_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_loss: Decimal,
}

/// Stateless tax calculator over a snapshot of income, investment data and
/// tax brackets.
///
/// Every operation is a pure function of the snapshot: no mutation, no I/O,
/// no suspension points. Repeated calls return identical results, and
/// distinct engines (or calls on the same engine) may run concurrently
/// without coordination.
#[derive(Debug, Clone)]
pub struct TaxEngine {
    income: Decimal,
    investments: InvestmentData,
    tax_brackets: Vec<TaxBracket>,
}

impl TaxEngine {
    /// Build an engine over a snapshot. `income` is non-negative by caller
    /// contract; `tax_brackets` may be empty and is applied in the order
    /// given, never sorted.
    pub fn new(
        income: Decimal,
        investments: InvestmentData,
        tax_brackets: Vec<TaxBracket>,
    ) -> Self {
        TaxEngine {
            income,
            investments,
            tax_brackets,
        }
    }

    fn holdings(&self) -> Result<&[Holding], EngineError> {
        match &self.investments {
            InvestmentData::Holdings(holdings) => Ok(holdings),
            InvestmentData::Accounts(_) => Err(EngineError::ExpectedHoldings),
        }
    }

    fn accounts(&self) -> Result<&[Account], EngineError> {
        match &self.investments {
            InvestmentData::Accounts(accounts) => Ok(accounts),
            InvestmentData::Holdings(_) => Err(EngineError::ExpectedAccounts),
        }
    }

    /// Total investment gain: the sum of `current_value - cost_basis` over
    /// all holdings. Positions at a loss subtract from the total, so the
    /// result may be negative. Empty data is zero.
    pub fn investment_gains(&self) -> Result<Decimal, EngineError> {
        Ok(self.holdings()?.iter().map(Holding::gain).sum())
    }

    /// Total tax due on income plus investment gains.
    ///
    /// Brackets are applied in the order supplied: each bracket taxes the
    /// portion of income above its own threshold, then income is clamped
    /// down to that threshold before the next bracket is evaluated. The
    /// conventional input is descending by threshold, top rate first; the
    /// engine never reorders, so a table in any other order is applied
    /// verbatim. Negative total gains reduce taxable income below the raw
    /// income figure. No rounding is applied.
    pub fn tax_due(&self) -> Result<Decimal, EngineError> {
        let total_gains = self.investment_gains()?;
        let mut remaining = self.income + total_gains;
        let mut tax_due = Decimal::ZERO;

        let descending = self
            .tax_brackets
            .windows(2)
            .all(|pair| pair[0].threshold >= pair[1].threshold);
        if !descending {
            log::warn!("tax brackets are not in descending threshold order; applying as supplied");
        }

        for bracket in &self.tax_brackets {
            if remaining > bracket.threshold {
                let slice = remaining - bracket.threshold;
                tax_due += slice * bracket.rate;
                log::debug!(
                    "bracket rate={} threshold={}: taxed slice {}, running total {}",
                    bracket.rate,
                    bracket.threshold,
                    slice,
                    tax_due
                );
                remaining = bracket.threshold;
            }
        }

        Ok(tax_due)
    }

    /// Scan per-security sell history for harvestable losses.
    ///
    /// A security qualifies when its sells executed below cost basis sum to
    /// a strictly positive loss; sells at a gain and non-sell transactions
    /// contribute nothing. Suggestions come back in encounter order (account
    /// order, then security order within the account), not sorted by
    /// magnitude.
    pub fn harvest_suggestions(&self) -> Result<Vec<HarvestSuggestion>, EngineError> {
        let mut suggestions = Vec::new();

        for account in self.accounts()? {
            for security in &account.securities {
                let total_loss = security.harvestable_loss();
                log::debug!("security {}: total_loss={}", security.name, total_loss);
                if total_loss > Decimal::ZERO {
                    suggestions.push(HarvestSuggestion {
                        security_name: security.name.clone(),
                        total_loss,
                    });
                }
            }
        }

        Ok(suggestions)
    }
}
