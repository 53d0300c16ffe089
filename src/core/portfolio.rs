use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A position in a security, as reported by the brokerage holdings feed.
///
/// Holdings are read-only inputs; nothing in the engine mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    /// Display label for the position, when the upstream feed has one.
    pub security: Option<String>,
    pub current_value: Decimal,
    pub cost_basis: Decimal,
}

impl Holding {
    /// Unrealized gain for this position. Negative when held at a loss.
    pub fn gain(&self) -> Decimal {
        self.current_value - self.cost_basis
    }
}

/// Transaction type as reported by the brokerage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    Buy,
    Sell,
    /// Any unrecognized type string; never participates in loss computation.
    #[default]
    Other,
}

impl TransactionKind {
    /// Map the brokerage `type` string. The match is exact: only `"sell"`
    /// transactions can realize a loss, everything else is non-matching.
    pub fn from_type_str(s: &str) -> Self {
        match s {
            "buy" => TransactionKind::Buy,
            "sell" => TransactionKind::Sell,
            _ => TransactionKind::Other,
        }
    }
}

/// A single brokerage transaction for a security.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Price at acquisition.
    pub cost_basis: Decimal,
    /// Execution price.
    pub price: Decimal,
    /// Trade date when the brokerage supplies one; informational only.
    pub date: Option<NaiveDate>,
}

impl Transaction {
    /// Loss realized by this transaction: positive only for a sell executed
    /// below its cost basis. Buys, other types, and sells at a gain are zero.
    pub fn realized_loss(&self) -> Decimal {
        if self.kind == TransactionKind::Sell && self.price < self.cost_basis {
            self.cost_basis - self.price
        } else {
            Decimal::ZERO
        }
    }
}

/// A security with its transaction history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Security {
    pub name: String,
    pub transactions: Vec<Transaction>,
}

impl Security {
    /// Total loss realized across all sells executed below cost basis.
    pub fn harvestable_loss(&self) -> Decimal {
        self.transactions
            .iter()
            .map(Transaction::realized_loss)
            .sum()
    }
}

/// A brokerage account holding securities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: Option<String>,
    pub securities: Vec<Security>,
}
