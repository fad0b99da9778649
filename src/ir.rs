use crate::columns::NUM_COLUMNS;

/// A row of the bank export, restricted to the columns of interest.
/// Values are indexed by position in [crate::columns::COLUMNS] and are `None`
/// if the file (or this particular row) didn't have that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRecord {
    /// 1-based line number in the bank export, for error messages
    pub line: u64,
    pub values: [Option<String>; NUM_COLUMNS],
}

/// A row with every column present and normalized, in output column order.
/// Ordering compares the values column by column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NormalizedRecord(pub [String; NUM_COLUMNS]);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub rows_written: usize,
}
