//! Interactive prompt for the contact assistant.
//!
//! This module reads commands line by line, hands them to the
//! `ContactAssistant`, and writes the replies back.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};
pub use handlers::{Clock, ContactAssistant, Reply};

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Banner printed once before the first prompt.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every line is read.
pub const PROMPT: &str = "Enter a command: ";

/// Run the prompt loop until `close`/`exit` or end of input.
///
/// Command failures are replies, not errors. Only I/O failures on `reader`
/// or `writer` end the loop with an error.
///
/// # Arguments
/// * `assistant` - The assistant owning the address book
/// * `reader` - Line source, usually locked stdin
/// * `writer` - Reply sink, usually stdout
pub fn run_server<R, W>(
    assistant: &mut ContactAssistant,
    mut reader: R,
    mut writer: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read command")?;

        if read == 0 {
            tracing::info!("Input closed, leaving prompt loop");
            writeln!(writer)?;
            writeln!(writer, "Good bye!")?;
            break;
        }

        match assistant.handle(&line) {
            Reply::Message(text) => writeln!(writer, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(writer, "{}", text)?;
                break;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
