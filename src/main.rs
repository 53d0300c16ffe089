use clap::{Parser, Subcommand};
use tax_alpha::cmd::{GainsCommand, HarvestCommand, SchemaCommand, TaxesCommand};

#[derive(Parser, Debug)]
#[command(
    name = "tax-alpha",
    version,
    about = "Tax due and tax-loss harvesting calculator for investment portfolios"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Total investment gain over brokerage holdings
    Gains(GainsCommand),
    /// Progressive tax due on income plus investment gains
    Taxes(TaxesCommand),
    /// Tax-loss harvesting suggestions from transaction history
    Harvest(HarvestCommand),
    /// Print expected input formats
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Gains(cmd) => cmd.exec(),
        Command::Taxes(cmd) => cmd.exec(),
        Command::Harvest(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
