pub mod batch;
pub mod config;
pub mod domain;
pub mod http;
pub mod parser;
pub mod prompt;
pub mod telemetry;
pub mod writer;
