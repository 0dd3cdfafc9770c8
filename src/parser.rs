//! Batch script rows: `op,account,name,amount,pin`, one operation per line.
//!
//! Header names are matched case-insensitively and may come in any order;
//! unknown columns are ignored.

use std::fmt;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use crate::domain::types::{Amount, OperationType};

const COLUMNS: [&str; 5] = ["op", "account", "name", "amount", "pin"];

/// One validated row of a batch script.
#[derive(Debug)]
pub struct InputRecord {
    pub op: OperationType,
    pub account: String,
    pub name: String,
    pub amount: Amount,
    pub pin: String,
}

#[derive(Debug)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

// Raw cells as they appear in the file; validation happens in `into_record`.
#[derive(Debug, Deserialize)]
struct ScriptRow {
    op: String,
    account: String,
    name: String,
    amount: String,
    pin: String,
}

impl ScriptRow {
    fn into_record(self, line: usize) -> Result<InputRecord, ParseError> {
        let fail = |message: String| ParseError { line, message };

        let op: OperationType = self
            .op
            .parse()
            .map_err(|_| fail(format!("Unknown operation: '{}'", self.op)))?;

        if op == OperationType::Create && self.name.is_empty() {
            return Err(fail("Create requires name".to_string()));
        }
        if self.amount.is_empty() {
            return Err(fail("Missing amount".to_string()));
        }
        let amount = Amount::parse(&self.amount)
            .map_err(|_| fail(format!("Invalid amount: '{}'", self.amount)))?;

        Ok(InputRecord {
            op,
            account: self.account,
            name: self.name,
            amount,
            pin: self.pin,
        })
    }
}

/// Streams [`InputRecord`]s out of a CSV batch script.
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl<R: Read> fmt::Debug for ScriptReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptReader")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl<R: Read> ScriptReader<R> {
    /// Reads the header row; fails if any required column is absent.
    pub fn new(reader: R) -> Result<Self, String> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: StringRecord = reader
            .headers()
            .map_err(|e| format!("Failed to read headers: {e}"))?
            .iter()
            .map(str::to_ascii_lowercase)
            .collect();

        if let Some(missing) = COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(format!("Missing required column: '{missing}'"));
        }

        Ok(ScriptReader {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<InputRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = (self.reader.position().line() as usize).max(2);
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self
                    .record
                    .position()
                    .map_or(line, |pos| pos.line() as usize);
                let row = self
                    .record
                    .deserialize::<ScriptRow>(Some(&self.headers))
                    .map_err(|e| ParseError {
                        line,
                        message: format!("Malformed row: {e}"),
                    });
                Some(row.and_then(|row| row.into_record(line)))
            }
            Err(e) => Some(Err(ParseError {
                line: e.position().map_or(line, |pos| pos.line() as usize),
                message: format!("CSV error: {e}"),
            })),
        }
    }
}
