use clap::Parser;
use std::path::PathBuf;

/// Reformat a bank CSV export as a simpler CSV with cleaner values.
/// Writes FILE--out.csv next to the input file.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    /// Path to the bank CSV export
    pub input: PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
