//! Command-line and environment configuration for the server binary.

use clap::{Parser, ValueEnum};

/// Item catalog HTTP API.
#[derive(Parser, Debug, Clone)]
#[command(name = "item-server")]
#[command(about = "In-memory item catalog served over HTTP/JSON")]
#[command(version)]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Enable debug logging for this service, ignoring RUST_LOG.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
