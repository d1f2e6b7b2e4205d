//! `tinycrypt pull` — fetch and decrypt the message stored under a key.

use std::io::{self, Write};

use crate::cli::output;
use crate::cli::{open_client, resolve_secret, Cli};
use crate::errors::Result;

/// Execute the `pull` command.
///
/// Returns `false` when nothing is stored under the key.
pub fn execute(cli: &Cli, key: Option<&str>, raw: bool) -> Result<bool> {
    let secret = resolve_secret(key)?;
    let client = open_client(cli)?;

    match client.pull(secret.as_bytes())? {
        Some(message) => {
            tracing::info!(bytes = message.len(), "message pulled");
            write_message(&message, raw)?;
            Ok(true)
        }
        None => {
            output::warning("No message stored under this key.");
            Ok(false)
        }
    }
}

/// Write a pulled message to stdout.
///
/// Text gets a trailing newline unless it already has one; binary data
/// and `--raw` output are written untouched.
pub fn write_message(message: &[u8], raw: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(message)?;

    let is_text = std::str::from_utf8(message).is_ok();
    if !raw && is_text && !message.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }

    stdout.flush()?;
    Ok(())
}
