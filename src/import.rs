use anyhow::{Context as _, Result};
use csv::StringRecord;
use std::io::Read;

use crate::columns::{COLUMNS, NUM_COLUMNS};
use crate::ir::ProjectedRecord;

/// Parses a `;` separated bank export. The first row is the header, every other row
/// becomes a [ProjectedRecord] holding only the columns of interest.
pub fn load(mut input_stream: impl Read) -> Result<Vec<ProjectedRecord>> {
    let mut content = String::new();
    input_stream
        .read_to_string(&mut content)
        .context("Failed to read bank export as utf-8")?;
    let content = maybe_remove_byte_order_mark(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b';')
        .quote(b'"')
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut rows = reader.records();

    let Some(header) = rows.next() else {
        log::warn!("Bank export is empty");
        return Ok(vec![]);
    };
    let header = header.context("Failed to parse header row")?;
    let positions = column_positions(&header);
    for (column, position) in COLUMNS.iter().zip(&positions) {
        if position.is_none() {
            log::warn!("Column '{}' not found in header", column.source_label);
        }
    }

    let records = rows
        .map(|row| {
            let row = row.context("Failed to parse row")?;
            Ok(project(&positions, &row))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(records)
}

fn maybe_remove_byte_order_mark(mut content: String) -> String {
    if content.starts_with('\u{FEFF}') {
        content.remove(0);
    }
    content
}

/// For each column of interest, the index of its cell in a row.
/// If a label appears multiple times in the header, the last one wins.
fn column_positions(header: &StringRecord) -> [Option<usize>; NUM_COLUMNS] {
    std::array::from_fn(|column| {
        header
            .iter()
            .enumerate()
            .filter(|(_, label)| *label == COLUMNS[column].source_label)
            .map(|(position, _)| position)
            .last()
    })
}

fn project(positions: &[Option<usize>; NUM_COLUMNS], row: &StringRecord) -> ProjectedRecord {
    ProjectedRecord {
        line: row.position().map(|pos| pos.line()).unwrap_or_default(),
        values: std::array::from_fn(|column| {
            positions[column]
                .and_then(|position| row.get(position))
                .map(str::to_string)
        }),
    }
}
