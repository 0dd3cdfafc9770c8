//! Interactive teller menu over any line-oriented reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::domain::{AccountLedger, Amount, LedgerError};
use crate::writer::{write_table, OutputRecord};

const MENU: &str = "\n--- ATM System ---
1. Create Account
2. Deposit
3. Withdraw
4. Show Accounts
5. Exit";

/// Human-readable text for each failure kind.
pub fn message(err: &LedgerError) -> String {
    match err {
        LedgerError::InvalidInput(msg) => format!("Invalid input: {msg}."),
        LedgerError::DuplicateAccount(_) => "Account already exists.".to_string(),
        LedgerError::AccountNotFound(_) => "Account not found.".to_string(),
        LedgerError::Authentication => "Authentication failed.".to_string(),
        LedgerError::InvalidAmount(_) => "Amount must be greater than zero.".to_string(),
        LedgerError::BalanceOverflow { .. } => {
            "Deposit would exceed the maximum balance.".to_string()
        }
        LedgerError::InsufficientFunds { available, .. } => {
            format!("Insufficient balance (available: {available}).")
        }
    }
}

pub struct Prompt<'a, R, W> {
    ledger: &'a mut AccountLedger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(ledger: &'a mut AccountLedger, input: R, output: W) -> Self {
        Prompt {
            ledger,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.ask("Enter choice: ")? {
                Some(choice) => choice,
                None => break,
            };

            let keep_going = match choice.trim() {
                "1" => self.create_account()?,
                "2" => self.deposit()?,
                "3" => self.withdraw()?,
                "4" => {
                    self.show_accounts()?;
                    true
                }
                "5" => false,
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }

    /// `None` means end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_amount(&mut self, question: &str) -> io::Result<Option<Option<Amount>>> {
        Ok(self
            .ask(question)?
            .map(|text| Amount::parse(&text).ok()))
    }

    fn report(&mut self, result: Result<(), LedgerError>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{success}"),
            Err(e) => writeln!(self.output, "{}", message(&e)),
        }
    }

    // Each operation returns Ok(false) when input runs out mid-dialog.

    fn create_account(&mut self) -> io::Result<bool> {
        let Some(number) = self.ask("Enter account number: ")? else {
            return Ok(false);
        };
        let Some(name) = self.ask("Enter holder name: ")? else {
            return Ok(false);
        };
        let Some(balance) = self.ask_amount("Enter initial balance: ")? else {
            return Ok(false);
        };
        let Some(pin) = self.ask("Set 4-digit PIN: ")? else {
            return Ok(false);
        };
        let Some(balance) = balance else {
            writeln!(self.output, "Invalid amount.")?;
            return Ok(true);
        };

        let result = self.ledger.create_account(&number, &name, balance, &pin);
        self.report(result, "Account created successfully.")?;
        Ok(true)
    }

    fn deposit(&mut self) -> io::Result<bool> {
        let Some(number) = self.ask("Enter account number: ")? else {
            return Ok(false);
        };
        let Some(amount) = self.ask_amount("Enter deposit amount: ")? else {
            return Ok(false);
        };
        let Some(pin) = self.ask("Enter PIN: ")? else {
            return Ok(false);
        };
        let Some(amount) = amount else {
            writeln!(self.output, "Invalid amount.")?;
            return Ok(true);
        };

        let result = self.ledger.deposit(&number, amount, &pin);
        self.report(result, "Deposit successful.")?;
        Ok(true)
    }

    fn withdraw(&mut self) -> io::Result<bool> {
        let Some(number) = self.ask("Enter account number: ")? else {
            return Ok(false);
        };
        let Some(amount) = self.ask_amount("Enter withdrawal amount: ")? else {
            return Ok(false);
        };
        let Some(pin) = self.ask("Enter PIN: ")? else {
            return Ok(false);
        };
        let Some(amount) = amount else {
            writeln!(self.output, "Invalid amount.")?;
            return Ok(true);
        };

        let result = self.ledger.try_withdraw(&number, amount, &pin);
        self.report(result, "Withdrawal successful.")?;
        Ok(true)
    }

    fn show_accounts(&mut self) -> io::Result<()> {
        if self.ledger.is_empty() {
            return writeln!(self.output, "No accounts.");
        }
        let records = self.ledger.list_accounts().map(OutputRecord::from_account);
        write_table(&mut self.output, records)
    }
}
