//! `tinycrypt completions` — generate shell completion scripts.
//!
//! Usage:
//!   tinycrypt completions bash > ~/.local/share/bash-completion/completions/tinycrypt
//!   tinycrypt completions zsh > "${fpath[1]}/_tinycrypt"

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout)?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut impl Write) -> io::Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
    out.flush()
}
