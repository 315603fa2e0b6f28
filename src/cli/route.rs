//! CLI route: typed request and the decode → build → serialize pipeline.

use crate::cli::parse::Cli;
use crate::error::ConvertError;
use crate::tree::builder::TreeBuilder;
use crate::tree::entry::decode_listing;
use tracing::info;

/// Typed conversion request, decoupled from process arguments so the
/// pipeline is unit-testable without spawning the binary.
#[derive(Debug)]
pub struct ConvertRequest {
    pub json: String,
}

impl ConvertRequest {
    /// Build a request from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConvertError> {
        let json = cli.json.clone().ok_or(ConvertError::MissingJson)?;
        Ok(Self { json })
    }
}

/// Run the full conversion: decode the payload, fold it into a forest,
/// serialize the forest to one compact JSON line.
pub fn execute(request: &ConvertRequest) -> Result<String, ConvertError> {
    let listing = decode_listing(&request.json)?;
    info!(entry_count = listing.tree.len(), "Listing decoded");

    let forest = TreeBuilder::new(listing.tree).build()?;

    // Forest only holds plain strings and vectors; to_string cannot fail here
    serde_json::to_string(&forest)
        .map_err(|e| ConvertError::Config(format!("failed to serialize forest: {}", e)))
}
