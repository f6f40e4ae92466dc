use std::env;

use anyhow::{bail, Result};
use clap::Parser;
use corvus::Client;

#[derive(Parser)]
#[command(name = "corvus", version, about = "Send a test event to a Sentry server")]
struct Cli {
    /// DSN of the target project; falls back to $SENTRY_DSN
    dsn: Option<String>,

    /// Message text to report
    #[arg(long, default_value = "This is a test message generated using `corvus`")]
    message: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dsn = cli
        .dsn
        .or_else(|| env::var("SENTRY_DSN").ok())
        .filter(|dsn| !dsn.trim().is_empty());
    let Some(dsn) = dsn else {
        bail!(
            "no configuration detected: pass a DSN argument or set the SENTRY_DSN environment variable"
        );
    };

    println!("Using DSN configuration:\n  {dsn}");
    let client = Client::new(dsn.trim())?;

    println!("Sending a test message...");
    let id = client.capture_message(&cli.message)?;
    println!("Message captured, id: {id}");

    Ok(())
}
