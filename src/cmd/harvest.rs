//! Harvest command - tax-loss harvesting suggestions from transaction history

use crate::cmd::read_harvest_request;
use crate::core::{Account, HarvestSuggestion, InvestmentData, TaxEngine};
use crate::request::validate_accounts;
use crate::utils::write_csv;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct HarvestCommand {
    /// JSON request file with accounts (or stdin with "-")
    #[arg(short, long)]
    request: PathBuf,

    /// Also show the qualifying sell transactions behind each suggestion
    #[arg(long)]
    detail: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl HarvestCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let request = read_harvest_request(&self.request)?;
        let accounts = validate_accounts(request.investment_data)?;

        let engine = TaxEngine::new(
            Decimal::ZERO,
            InvestmentData::Accounts(accounts.clone()),
            Vec::new(),
        );
        let suggestions = engine.harvest_suggestions()?;

        if self.json {
            // Same shape the service layer returns: a bare suggestion array.
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
            return Ok(());
        }

        let rows = build_suggestion_rows(&suggestions);
        if self.csv {
            return write_csv(&rows, io::stdout());
        }

        self.print_table(&rows);
        if self.detail {
            self.print_detail(&accounts);
        }
        Ok(())
    }

    fn print_table(&self, rows: &[SuggestionRow]) {
        if rows.is_empty() {
            println!("No harvestable losses found");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn print_detail(&self, accounts: &[Account]) {
        let rows = build_detail_rows(accounts);
        if rows.is_empty() {
            return;
        }

        println!();
        println!("Qualifying sells:");
        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}

/// Row for the suggestions table output
#[derive(Debug, Clone, Tabled, Serialize)]
struct SuggestionRow {
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Total Loss")]
    total_loss: String,
}

fn build_suggestion_rows(suggestions: &[HarvestSuggestion]) -> Vec<SuggestionRow> {
    suggestions
        .iter()
        .map(|s| SuggestionRow {
            security: s.security_name.clone(),
            total_loss: format_usd(s.total_loss),
        })
        .collect()
}

/// Row for the per-transaction detail table
#[derive(Debug, Clone, Tabled)]
struct DetailRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Cost Basis")]
    cost_basis: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Loss")]
    loss: String,
}

fn build_detail_rows(accounts: &[Account]) -> Vec<DetailRow> {
    let mut rows = Vec::new();
    for account in accounts {
        let account_name = account.name.clone().unwrap_or_else(|| "-".to_string());
        for security in &account.securities {
            if security.harvestable_loss() <= Decimal::ZERO {
                continue;
            }
            for tx in &security.transactions {
                let loss = tx.realized_loss();
                if loss <= Decimal::ZERO {
                    continue;
                }
                rows.push(DetailRow {
                    account: account_name.clone(),
                    security: security.name.clone(),
                    date: tx
                        .date
                        .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
                    cost_basis: format_usd(tx.cost_basis),
                    price: format_usd(tx.price),
                    loss: format_usd(loss),
                });
            }
        }
    }
    rows
}

fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
