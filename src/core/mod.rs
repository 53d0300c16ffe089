pub mod brackets;
pub mod engine;
pub mod error;
pub mod portfolio;

// Flat public surface for domain types and functions.
pub use brackets::TaxBracket;
pub use engine::{HarvestSuggestion, InvestmentData, TaxEngine};
pub use error::EngineError;
pub use portfolio::{Account, Holding, Security, Transaction, TransactionKind};
