use anyhow::Result;
use std::io::Write;

use crate::columns::COLUMNS;
use crate::ir::NormalizedRecord;

/// Writes a `,` separated file with a header row, quoting only the cells that need it.
pub fn write_records(records: &[NormalizedRecord], output_stream: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output_stream);
    writer.write_record(COLUMNS.iter().map(|column| column.output_label))?;
    for record in records {
        writer.write_record(&record.0)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date de valeur,Solde,Description 2,Description 3,Débit,Crédit\r\n";

    fn export(records: &[NormalizedRecord]) -> String {
        let mut output = Vec::new();
        write_records(records, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn normalized(values: [&str; 6]) -> NormalizedRecord {
        NormalizedRecord(values.map(str::to_string))
    }

    #[test]
    fn header_only() {
        assert_eq!(HEADER, export(&[]));
    }

    #[test]
    fn rows() {
        let output = export(&[
            normalized(["2023-02-01", "1234.50", "Shop", "", "100.00", ""]),
            normalized(["2023-02-03", "1334.50", "Salary", "Employer", "", "100.00"]),
        ]);
        assert_eq!(
            format!(
                "{HEADER}2023-02-01,1234.50,Shop,,100.00,\r\n2023-02-03,1334.50,Salary,Employer,,100.00\r\n"
            ),
            output,
        );
    }

    #[test]
    fn quotes_only_when_necessary() {
        let output = export(&[normalized([
            "2023-02-01",
            "1,234.50",
            "Say \"hi\"",
            "line\nbreak",
            "semi;colon",
            "plain text",
        ])]);
        assert_eq!(
            format!(
                "{HEADER}2023-02-01,\"1,234.50\",\"Say \"\"hi\"\"\",\"line\nbreak\",semi;colon,plain text\r\n"
            ),
            output,
        );
    }

    #[test]
    fn no_byte_order_mark() {
        assert!(!export(&[]).starts_with('\u{FEFF}'));
    }
}
