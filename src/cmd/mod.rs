pub mod gains;
pub mod harvest;
pub mod schema;
pub mod taxes;

pub use gains::GainsCommand;
pub use harvest::HarvestCommand;
pub use schema::SchemaCommand;
pub use taxes::TaxesCommand;

use crate::request::{self, HarvestRequest, TaxComputationRequest};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a tax computation request (JSON) from a file, or stdin with "-".
pub fn read_tax_request(path: &Path) -> anyhow::Result<TaxComputationRequest> {
    if path.as_os_str() == "-" {
        request::read_tax_request_json(read_stdin()?)
    } else {
        let file = File::open(path)?;
        request::read_tax_request_json(BufReader::new(file))
    }
}

/// Read a harvesting request (JSON) from a file, or stdin with "-".
pub fn read_harvest_request(path: &Path) -> anyhow::Result<HarvestRequest> {
    if path.as_os_str() == "-" {
        request::read_harvest_request_json(read_stdin()?)
    } else {
        let file = File::open(path)?;
        request::read_harvest_request_json(BufReader::new(file))
    }
}

fn read_stdin() -> anyhow::Result<io::Cursor<Vec<u8>>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    Ok(io::Cursor::new(buffer))
}
