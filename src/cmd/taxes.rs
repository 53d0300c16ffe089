//! Taxes command - progressive tax due on income plus investment gains

use crate::cmd::read_tax_request;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TaxesCommand {
    /// JSON request file with income, tax brackets and holdings (or stdin with "-")
    #[arg(short, long)]
    request: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct TaxSummaryData {
    #[serde(with = "rust_decimal::serde::float")]
    income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total_gains: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total_income: Decimal,
    bracket_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    tax_due: Decimal,
}

impl TaxesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let request = read_tax_request(&self.request)?;
        let income = request.income;
        let bracket_count = request.tax_brackets.len();

        let engine = request.into_engine()?;
        let total_gains = engine.investment_gains()?;
        let tax_due = engine.tax_due()?;

        let data = TaxSummaryData {
            income,
            total_gains,
            total_income: income + total_gains,
            bracket_count,
            tax_due,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            self.print_summary(&data);
        }
        Ok(())
    }

    fn print_summary(&self, data: &TaxSummaryData) {
        println!();
        println!("TAX SUMMARY");
        println!();
        println!("INCOME");
        println!("  Reported income: {}", format_usd(data.income));
        println!(
            "  Investment gains: {}",
            format_usd_signed(data.total_gains)
        );
        println!("  Total taxable: {}", format_usd_signed(data.total_income));
        println!();
        println!("TAX");
        println!("  Brackets applied: {}", data.bracket_count);
        println!("  Tax due: {}", format_usd(data.tax_due));
    }
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
