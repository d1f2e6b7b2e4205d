//! `tinycrypt exchange` — pull a message, or push one if the key is empty.
//!
//! Lets two parties share one key: whoever runs first leaves a message,
//! whoever runs second reads it.

use crate::cli::commands::pull::write_message;
use crate::cli::output;
use crate::cli::{open_client, resolve_secret, Cli};
use crate::errors::Result;

/// Execute the `exchange` command.
///
/// An empty stored message counts as nothing stored, so it is
/// overwritten when words are given.  Returns `false` when nothing was
/// stored and nothing was pushed.
pub fn execute(cli: &Cli, key: Option<&str>, words: &[String]) -> Result<bool> {
    let secret = resolve_secret(key)?;
    let client = open_client(cli)?;

    if let Some(message) = client.pull(secret.as_bytes())? {
        if !message.is_empty() {
            tracing::info!(bytes = message.len(), "exchange found a message");
            write_message(&message, false)?;
            return Ok(true);
        }
        tracing::debug!("exchange found an empty message");
    }

    if words.is_empty() {
        output::warning("No message stored under this key.");
        return Ok(false);
    }

    let message = words.join(" ");
    client.push(secret.as_bytes(), message.as_bytes())?;

    tracing::info!(bytes = message.len(), "exchange pushed a message");
    output::info("Nothing stored under this key yet.");
    output::success(&format!("Pushed {} bytes", message.len()));
    Ok(true)
}
