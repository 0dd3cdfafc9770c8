use std::io::Write;

use crate::domain::account::Account;
use crate::domain::types::{AccountId, Amount};

pub struct OutputRecord {
    pub account: AccountId,
    pub holder: String,
    pub balance: Amount,
}

impl OutputRecord {
    pub fn from_account(account: &Account) -> Self {
        OutputRecord {
            account: account.id().clone(),
            holder: account.holder_name().to_string(),
            balance: account.balance(),
        }
    }
}

/// CSV listing used by batch mode. Fields are quoted by the csv writer when needed.
pub fn write_csv<W: Write>(
    writer: &mut W,
    records: impl Iterator<Item = OutputRecord>,
) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["account", "holder", "balance"])?;

    for record in records {
        csv_writer.write_record([
            record.account.as_str(),
            record.holder.as_str(),
            record.balance.to_string().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Teller-style listing, one `id | name | balance` line per account.
pub fn write_table<W: Write>(
    writer: &mut W,
    records: impl Iterator<Item = OutputRecord>,
) -> std::io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "{} | {} | {}",
            record.account, record.holder, record.balance
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).expect("failed to parse amount")
    }

    fn record(id: &str, holder: &str, balance: &str) -> OutputRecord {
        OutputRecord {
            account: AccountId::from(id),
            holder: holder.to_string(),
            balance: amount(balance),
        }
    }

    #[test]
    fn test_csv_column_order_and_precision() {
        let mut output = Vec::new();
        write_csv(&mut output, vec![record("A1", "Alice", "150")].into_iter())
            .expect("failed to write CSV");
        let csv = String::from_utf8(output).expect("output should be valid UTF-8");
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "account,holder,balance");
        assert_eq!(lines[1], "A1,Alice,150.00");
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let mut output = Vec::new();
        write_csv(
            &mut output,
            vec![record("A1", "Doe, Jane", "1")].into_iter(),
        )
        .expect("failed to write CSV");
        let csv = String::from_utf8(output).expect("output should be valid UTF-8");
        assert!(csv.contains("A1,\"Doe, Jane\",1.00"));
    }

    #[test]
    fn test_csv_empty_records() {
        let mut output = Vec::new();
        let records: Vec<OutputRecord> = vec![];
        write_csv(&mut output, records.into_iter()).expect("failed to write CSV");
        let csv = String::from_utf8(output).expect("output should be valid UTF-8");
        assert_eq!(csv, "account,holder,balance\n");
    }

    #[test]
    fn test_csv_unix_newlines() {
        let mut output = Vec::new();
        write_csv(&mut output, vec![record("A1", "Alice", "1")].into_iter())
            .expect("failed to write CSV");
        let csv = String::from_utf8(output).expect("output should be valid UTF-8");
        assert!(!csv.contains("\r\n"), "Output contains CRLF instead of LF");
    }

    #[test]
    fn test_table_format() {
        let mut output = Vec::new();
        write_table(
            &mut output,
            vec![record("A1", "Alice", "100"), record("B2", "Bob", "0.5")].into_iter(),
        )
        .expect("failed to write table");
        let table = String::from_utf8(output).expect("output should be valid UTF-8");
        assert_eq!(table, "A1 | Alice | 100.00\nB2 | Bob | 0.50\n");
    }
}
