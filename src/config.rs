use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "atm-ledger")]
#[command(about = "In-memory teller ledger with prompt, HTTP and batch front ends", long_about = None)]
pub struct Cli {
    /// Log filter directive, e.g. `info` or `atm_ledger=debug`. Falls back to RUST_LOG.
    #[arg(long, global = true, env = "ATM_LOG")]
    pub log_level: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive teller menu on stdin/stdout (default)
    Prompt,
    /// Serve the JSON request layer
    Serve {
        #[arg(long, env = "ATM_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Replay a CSV script of operations and print the resulting accounts
    Batch { script: PathBuf },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Prompt)
    }
}
