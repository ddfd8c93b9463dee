//! qfs - Post-quantum handshake client
//!
//! Runs the Kyber512 handshake against a QFS server and sends an AES-256-GCM
//! encrypted request over the resulting session.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;

use qfs_core::state::PqeStatus;
use qfs_core::utils::logging::init_logging;
use qfs_core::{Config, Endpoints, HttpTransport, PqeClient};

/// qfs - Post-quantum handshake client
///
/// Server address defaults to QFS_SERVER_URL, then https://127.0.0.1:3000.
#[derive(Parser)]
#[command(name = "qfs")]
#[command(version)]
#[command(about = "Kyber512 handshake and AES-256-GCM encrypted requests against a QFS server")]
struct Cli {
    /// Server base URL (overrides QFS_SERVER_URL)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Request timeout in seconds (overrides QFS_TIMEOUT_SECS)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Skip TLS certificate verification (self-signed development servers only)
    #[arg(long, global = true)]
    insecure: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform the KEM handshake only
    Handshake,

    /// Perform the handshake, then send one encrypted request
    Send {
        /// Text to encrypt and send (default: the test payload)
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(server) = cli.server {
        config.endpoints = Endpoints::new(server);
    }
    if let Some(secs) = cli.timeout {
        config.transport.timeout = Duration::from_secs(secs);
    }
    if cli.insecure {
        config.transport.accept_invalid_certs = true;
    }

    let transport =
        HttpTransport::new(&config.transport).context("Failed to create HTTP transport")?;
    let mut client = PqeClient::new(transport, config.endpoints);

    if let Err(e) = client.handshake() {
        println!("{}", PqeStatus::from_client_error(&e));
        return Err(e).context("Handshake did not complete");
    }
    println!("{}", PqeStatus::handshake_ok());

    if let Commands::Send { message } = cli.command {
        let response = match message {
            Some(text) => client.send(text.as_bytes()),
            None => client.send_test_payload(),
        };
        match response {
            Ok(response) => {
                println!("{}", PqeStatus::sent(response.status));
                println!("{}", response.text());
            }
            Err(e) => {
                println!("{}", PqeStatus::from_client_error(&e));
                return Err(e).context("Encrypted request failed");
            }
        }
    }

    Ok(())
}
