//! `tinycrypt push` — encrypt a message and store it under a key.

use crate::cli::output;
use crate::cli::{open_client, read_message, resolve_secret, Cli};
use crate::errors::Result;

/// Execute the `push` command.
pub fn execute(cli: &Cli, key: Option<&str>, words: &[String], raw: bool) -> Result<()> {
    let secret = resolve_secret(key)?;
    let message = read_message(words, raw)?;

    let client = open_client(cli)?;
    client.push(secret.as_bytes(), &message)?;

    tracing::info!(bytes = message.len(), "message pushed");
    output::success(&format!("Pushed {} bytes", message.len()));
    output::tip("Run `tinycrypt pull <KEY>` from anywhere to read it back.");

    Ok(())
}
