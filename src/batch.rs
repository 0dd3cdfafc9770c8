//! Replays a CSV script of teller operations against a ledger.

use std::io::Read;

use tracing::warn;

use crate::domain::types::OperationType;
use crate::domain::{AccountLedger, LedgerResult};
use crate::parser::{InputRecord, ScriptReader};

/// Outcome counts for one script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub applied: usize,
    pub rejected: usize,
    pub malformed: usize,
}

pub fn apply(ledger: &mut AccountLedger, record: &InputRecord) -> LedgerResult<()> {
    match record.op {
        OperationType::Create => {
            ledger.create_account(&record.account, &record.name, record.amount, &record.pin)
        }
        OperationType::Deposit => ledger.deposit(&record.account, record.amount, &record.pin),
        OperationType::Withdraw => {
            ledger.try_withdraw(&record.account, record.amount, &record.pin)
        }
    }
}

/// Malformed rows and rejected operations are logged and skipped.
pub fn run<R: Read>(ledger: &mut AccountLedger, reader: R) -> Result<BatchReport, String> {
    let script = ScriptReader::new(reader)?;
    let mut report = BatchReport::default();

    for result in script {
        match result {
            Ok(record) => match apply(ledger, &record) {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    warn!(op = ?record.op, account = %record.account, error = %e, "operation rejected");
                    report.rejected += 1;
                }
            },
            Err(e) => {
                warn!("{}", e);
                report.malformed += 1;
            }
        }
    }

    Ok(report)
}
