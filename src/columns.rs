use crate::formatters::Formatter;

/// A column of the bank export that is kept in the reformatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header label in the bank export. Matched byte for byte.
    pub source_label: &'static str,
    /// Header label written to the output.
    pub output_label: &'static str,
    pub formatter: Formatter,
}

const fn column(label: &'static str, formatter: Formatter) -> Column {
    Column {
        source_label: label,
        output_label: label,
        formatter,
    }
}

pub const NUM_COLUMNS: usize = 6;

/// Columns of interest, in output order. The first column must be the value date,
/// the output is sorted by it.
pub const COLUMNS: [Column; NUM_COLUMNS] = [
    column("Date de valeur", Formatter::Date),
    column("Solde", Formatter::Amount),
    column("Description 2", Formatter::Identity),
    column("Description 3", Formatter::Identity),
    column("Débit", Formatter::Amount),
    column("Crédit", Formatter::Amount),
];
