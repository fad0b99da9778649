use anyhow::{bail, Result};

/// Normalization applied to the values of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// `dd.mm.yyyy` -> `yyyy-mm-dd`
    Date,
    /// Strips `'` thousands separators
    Amount,
    Identity,
}

impl Formatter {
    pub fn apply(&self, value: &str) -> Result<String> {
        match self {
            Formatter::Date => format_date(value),
            Formatter::Amount => Ok(format_amount(value)),
            Formatter::Identity => Ok(value.to_string()),
        }
    }
}

fn format_date(value: &str) -> Result<String> {
    let parts: Vec<&str> = value.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        bail!("Malformed date '{}', expected day.month.year", value);
    };
    Ok(format!("{year}-{month}-{day}"))
}

fn format_amount(value: &str) -> String {
    value.replace('\'', "")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("01.02.2023", "2023-02-01")]
    #[case("31.12.1999", "1999-12-31")]
    #[case("1.2.2023", "2023-2-1")]
    #[case("..", "--")]
    fn date(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(expected, Formatter::Date.apply(input).unwrap());
    }

    #[test]
    fn date_components_are_only_rearranged() {
        let formatted = Formatter::Date.apply("07.08.2024").unwrap();
        let parts: Vec<&str> = formatted.split('-').collect();
        assert_eq!(vec!["2024", "08", "07"], parts);
        assert_eq!("07.08.2024", format!("{}.{}.{}", parts[2], parts[1], parts[0]));
    }

    #[rstest]
    #[case("01/02/2023")]
    #[case("2023-02-01")]
    #[case("01.02")]
    #[case("01.02.2023.4")]
    #[case("")]
    fn malformed_date(#[case] input: &str) {
        let err = Formatter::Date.apply(input).unwrap_err();
        assert_eq!(
            format!("Malformed date '{input}', expected day.month.year"),
            err.to_string()
        );
    }

    #[rstest]
    #[case("1'234.50", "1234.50")]
    #[case("-1'234'567.00", "-1234567.00")]
    #[case("100.00", "100.00")]
    #[case("CHF 1'000", "CHF 1000")]
    #[case("''", "")]
    #[case("", "")]
    fn amount(#[case] input: &str, #[case] expected: &str) {
        let formatted = Formatter::Amount.apply(input).unwrap();
        assert_eq!(expected, formatted);
        assert!(!formatted.contains('\''));
        assert_eq!(formatted, Formatter::Amount.apply(&formatted).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("Shop")]
    #[case("  padded ; \"quoted\" 1'000 01.02.2023 ")]
    fn identity(#[case] input: &str) {
        assert_eq!(input, Formatter::Identity.apply(input).unwrap());
    }
}
