//! CLI domain: parse, route, and output only.
//! No transformation logic; the route hands typed requests to the tree builder.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::{execute, ConvertRequest};
