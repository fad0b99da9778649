use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub mod args;
pub mod cli;
mod columns;
mod export;
mod formatters;
mod import;
mod ir;
mod operations;
pub mod paths;
mod terminal;

pub use ir::{NormalizedRecord, Summary};

/// A fully processed bank export, ready to be written.
#[derive(Debug)]
pub struct Statement {
    pub records: Vec<NormalizedRecord>,
    pub summary: Summary,
}

/// Reads a bank export and runs it through filtering, normalization and sorting.
/// Nothing is written here, so a malformed row fails the run before any output exists.
pub fn process(input_stream: impl Read) -> Result<Statement> {
    let records = import::load(input_stream)?;
    let rows_read = records.len();

    let records = operations::drop_non_transactions(records);
    let rows_dropped = rows_read - records.len();

    let records = records
        .into_iter()
        .map(operations::normalize)
        .collect::<Result<Vec<_>>>()?;
    let records = operations::sort_by_value_date(records);

    Ok(Statement {
        summary: Summary {
            rows_read,
            rows_dropped,
            rows_written: records.len(),
        },
        records,
    })
}

/// Processes a whole bank export, then writes the reformatted CSV to `output_stream`.
pub fn convert(input_stream: impl Read, output_stream: impl Write) -> Result<Summary> {
    let statement = process(input_stream)?;
    export::write_records(&statement.records, output_stream)?;
    Ok(statement.summary)
}

pub fn convert_file(input_path: &Path, output_path: &Path) -> Result<Summary> {
    log::info!("Loading {}...", input_path.display());
    let input = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let statement = process(BufReader::new(input))
        .with_context(|| format!("Failed to process {}", input_path.display()))?;
    log::info!("Loading {}...done", input_path.display());

    log::info!("Writing {}...", output_path.display());
    let output = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    export::write_records(&statement.records, BufWriter::new(output))
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    log::info!("Writing {}...done", output_path.display());

    Ok(statement.summary)
}
