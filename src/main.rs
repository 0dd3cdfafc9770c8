use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{anyhow, Context};
use clap::Parser;

use atm_ledger::config::{Cli, Command};
use atm_ledger::domain::AccountLedger;
use atm_ledger::prompt::Prompt;
use atm_ledger::writer::{write_csv, OutputRecord};
use atm_ledger::{batch, http, telemetry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_level.as_deref(), cli.log_format);

    let mut ledger = AccountLedger::new();

    match cli.command() {
        Command::Prompt => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Prompt::new(&mut ledger, stdin.lock(), stdout.lock())
                .run()
                .context("prompt i/o failed")?;
        }
        Command::Serve { bind } => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime.block_on(http::serve(bind, http::shared(ledger)))?;
        }
        Command::Batch { script } => {
            let file = File::open(&script)
                .with_context(|| format!("failed to open '{}'", script.display()))?;
            let report = batch::run(&mut ledger, BufReader::new(file)).map_err(|e| anyhow!(e))?;
            tracing::info!(
                applied = report.applied,
                rejected = report.rejected,
                malformed = report.malformed,
                "batch complete"
            );

            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let records = ledger.list_accounts().map(OutputRecord::from_account);
            write_csv(&mut handle, records).context("failed to write output")?;
        }
    }

    Ok(())
}
