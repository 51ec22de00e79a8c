//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Diagnostics go to stderr
//! so they never interleave with replies.

use anyhow::Result;
use contact_book::{run_server, Config, ContactAssistant};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut assistant = ContactAssistant::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_server(&mut assistant, stdin.lock(), stdout.lock()) {
        error!("Prompt loop failed: {:#}", e);
        return Err(e);
    }

    info!(contacts = assistant.book().len(), "Contact book shutdown complete");
    Ok(())
}
