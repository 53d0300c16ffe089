//! Schema command - print expected input formats

use crate::request::{HarvestRequest, TaxComputationRequest};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which request format to print
    #[arg(value_enum, default_value = "tax-request")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// Request body for the gains and taxes commands
    TaxRequest,
    /// Request body for the harvest command
    HarvestRequest,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.format {
            SchemaFormat::TaxRequest => schema_for!(TaxComputationRequest),
            SchemaFormat::HarvestRequest => schema_for!(HarvestRequest),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
