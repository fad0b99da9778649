use anyhow::{anyhow, Context as _, Result};

use crate::columns::{COLUMNS, NUM_COLUMNS};
use crate::ir::{NormalizedRecord, ProjectedRecord};

/// Bank exports contain summary, footer and separator rows between the actual
/// transactions. Those have at most one non-empty value among the columns of interest,
/// or only empty values.
pub fn is_transaction(record: &ProjectedRecord) -> bool {
    let present = || record.values.iter().flatten();
    let num_non_empty = present().filter(|value| !value.is_empty()).count();
    if num_non_empty <= 1 {
        return false;
    }
    let has_values = present().next().is_some();
    if has_values && present().all(|value| value.is_empty()) {
        return false;
    }
    true
}

pub fn drop_non_transactions(records: Vec<ProjectedRecord>) -> Vec<ProjectedRecord> {
    records
        .into_iter()
        .filter(|record| {
            let keep = is_transaction(record);
            if !keep {
                log::debug!("Dropping line {}: not a transaction", record.line);
            }
            keep
        })
        .collect()
}

pub fn normalize(record: ProjectedRecord) -> Result<NormalizedRecord> {
    let line = record.line;
    let mut normalized: [String; NUM_COLUMNS] = std::array::from_fn(|_| String::new());
    for ((column, value), normalized) in COLUMNS.iter().zip(record.values).zip(&mut normalized) {
        let value = value.ok_or_else(|| {
            anyhow!(
                "Line {}: missing value for column '{}'",
                line,
                column.source_label
            )
        })?;
        *normalized = column
            .formatter
            .apply(&value)
            .with_context(|| anyhow!("Line {}: invalid '{}'", line, column.source_label))?;
    }
    Ok(NormalizedRecord(normalized))
}

/// Sorts by the first column (the value date), ties are broken by the following columns.
/// Dates are `yyyy-mm-dd` strings, so lexicographic order is chronological order.
pub fn sort_by_value_date(mut records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    records.sort();
    records
}
