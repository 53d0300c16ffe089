//! Gains command - total investment gain over brokerage holdings

use crate::cmd::read_tax_request;
use crate::core::{Holding, InvestmentData, TaxEngine};
use crate::request::validate_holdings;
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
pub struct GainsCommand {
    /// JSON request file with holdings (or stdin with "-")
    #[arg(short, long)]
    request: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Gains data for JSON output
#[derive(Debug, Serialize)]
struct GainsData {
    holding_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    total_gains: Decimal,
}

impl GainsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let request = read_tax_request(&self.request)?;
        let income = request.income;
        let holdings = validate_holdings(request.investment_data)?;
        let rows = build_holding_rows(&holdings);

        let engine = TaxEngine::new(
            income,
            InvestmentData::Holdings(holdings),
            request.tax_brackets,
        );
        let total_gains = engine.investment_gains()?;

        if self.json {
            let data = GainsData {
                holding_count: rows.len(),
                total_gains,
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        } else if self.csv {
            write_csv(&rows, io::stdout())
        } else {
            self.print_table(&rows, total_gains);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[HoldingRow], total_gains: Decimal) {
        if rows.is_empty() {
            println!("No holdings in request");
        } else {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        println!();
        println!("Total gains: {}", format_usd_signed(total_gains));
    }
}

/// Row for the holdings table output
#[derive(Debug, Clone, Tabled, Serialize)]
struct HoldingRow {
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Value")]
    current_value: String,
    #[tabled(rename = "Cost Basis")]
    cost_basis: String,
    #[tabled(rename = "Gain/Loss")]
    gain: String,
}

fn build_holding_rows(holdings: &[Holding]) -> Vec<HoldingRow> {
    holdings
        .iter()
        .map(|h| HoldingRow {
            security: h.security.clone().unwrap_or_else(|| "-".to_string()),
            current_value: format_usd(h.current_value),
            cost_basis: format_usd(h.cost_basis),
            gain: format_usd_signed(h.gain()),
        })
        .collect()
}

fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

fn format_usd_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}
