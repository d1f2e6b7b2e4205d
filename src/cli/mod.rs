//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::{Backend, Settings};
use crate::errors::{Result, TinyCryptError};
use crate::store::{FileStore, RemoteStore};
use crate::vault::VaultClient;

/// Exit code for "nothing is stored under this key".
pub const EXIT_ABSENT: i32 = 2;

/// TinyCrypt CLI: encrypted messages hidden behind URL shortener aliases.
#[derive(Parser)]
#[command(
    name = "tinycrypt",
    about = "Encrypted messages stored under hashed aliases in a public URL shortener",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store backend (overrides .tinycrypt.toml)
    #[arg(long, value_enum, global = true)]
    pub backend: Option<Backend>,

    /// JSON file used by the file backend (overrides .tinycrypt.toml)
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Config file to load instead of ./.tinycrypt.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a message and store it under a key
    Push {
        /// Secret key (omit for TINYCRYPT_KEY or an interactive prompt)
        #[arg(env = "TINYCRYPT_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Message words, joined with spaces (omit to read stdin or prompt)
        message: Vec<String>,

        /// Keep piped stdin byte-for-byte (no trailing newline stripping)
        #[arg(long)]
        raw: bool,
    },

    /// Fetch and decrypt the message stored under a key
    Pull {
        /// Secret key (omit for TINYCRYPT_KEY or an interactive prompt)
        #[arg(env = "TINYCRYPT_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Write the message byte-for-byte, without a trailing newline
        #[arg(long)]
        raw: bool,
    },

    /// Pull a message, or push one if nothing is stored yet
    Exchange {
        /// Secret key (omit for TINYCRYPT_KEY or an interactive prompt)
        #[arg(env = "TINYCRYPT_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Message to push when the key is still empty
        message: Vec<String>,
    },

    /// Show the public alias a key maps to
    Alias {
        /// Secret key (omit for TINYCRYPT_KEY or an interactive prompt)
        #[arg(env = "TINYCRYPT_KEY", hide_env_values = true)]
        key: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Show license information
    License,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the secret key, trying in order:
/// 1. The positional argument (clap already falls back to `TINYCRYPT_KEY`)
/// 2. Interactive hidden prompt, when stdin is a terminal
///
/// Returns `Zeroizing<String>` so the key is wiped from memory on drop.
pub fn resolve_secret(key: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(key) = key {
        if !key.is_empty() {
            return Ok(Zeroizing::new(key.to_string()));
        }
    }

    if !io::stdin().is_terminal() {
        return Err(TinyCryptError::CommandFailed(
            "no key given: pass KEY or set TINYCRYPT_KEY".into(),
        ));
    }

    let key = dialoguer::Password::new()
        .with_prompt("Enter secret key")
        .interact()
        .map_err(|e| TinyCryptError::CommandFailed(format!("key prompt: {e}")))?;
    Ok(Zeroizing::new(key))
}

/// Load settings from `--config` or `./.tinycrypt.toml`, then apply
/// command-line overrides.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let mut settings = match &cli.config {
        Some(path) => Settings::load_file(path)?,
        None => Settings::load(&cwd)?,
    };

    if let Some(backend) = cli.backend {
        settings.backend = backend;
    }
    if let Some(path) = &cli.store_file {
        settings.store_file = path.clone();
    }

    Ok(settings)
}

/// Build the store selected by the settings.
pub fn open_store(settings: &Settings) -> Result<Box<dyn RemoteStore>> {
    match settings.backend {
        Backend::File => {
            let path = settings.store_path(&std::env::current_dir()?);
            tracing::debug!(path = %path.display(), "using file store");
            Ok(Box::new(FileStore::new(path)))
        }
        #[cfg(feature = "tinyurl")]
        Backend::Tinyurl => {
            tracing::debug!(base = %settings.tinyurl_base, "using tinyurl store");
            Ok(Box::new(crate::store::TinyUrlStore::from_settings(settings)?))
        }
        #[cfg(not(feature = "tinyurl"))]
        Backend::Tinyurl => Err(TinyCryptError::ConfigError(
            "this build has no tinyurl backend; rebuild with `--features tinyurl` or use `--backend file`"
                .into(),
        )),
    }
}

/// Build a client over the configured store.
pub fn open_client(cli: &Cli) -> Result<VaultClient<Box<dyn RemoteStore>>> {
    let settings = load_settings(cli)?;
    Ok(VaultClient::new(open_store(&settings)?))
}

/// Read a message from the CLI words, piped stdin, or a prompt.
///
/// Words are joined with single spaces and encoded as UTF-8.  Piped
/// stdin is taken as raw bytes; unless `raw` is set, one trailing
/// newline is dropped.
pub fn read_message(words: &[String], raw: bool) -> Result<Vec<u8>> {
    if !words.is_empty() {
        return Ok(words.join(" ").into_bytes());
    }

    if !io::stdin().is_terminal() {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        if !raw {
            strip_trailing_newline(&mut buf);
        }
        return Ok(buf);
    }

    let message: String = dialoguer::Input::new()
        .with_prompt("Message")
        .interact_text()
        .map_err(|e| TinyCryptError::CommandFailed(format!("message prompt: {e}")))?;
    Ok(message.into_bytes())
}

fn strip_trailing_newline(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn push_splits_key_and_message_words() {
        let cli = Cli::parse_from(["tinycrypt", "push", "correct horse", "meet", "at", "dawn"]);
        match cli.command {
            Commands::Push { key, message, raw } => {
                assert_eq!(key.as_deref(), Some("correct horse"));
                assert_eq!(message, vec!["meet", "at", "dawn"]);
                assert!(!raw);
            }
            _ => panic!("expected push"),
        }
    }

    #[test]
    fn global_backend_flag_after_subcommand() {
        let cli = Cli::parse_from(["tinycrypt", "pull", "k", "--backend", "file"]);
        assert_eq!(cli.backend, Some(Backend::File));
    }

    #[test]
    fn explicit_key_wins() {
        let key = resolve_secret(Some("hunter2")).unwrap();
        assert_eq!(key.as_str(), "hunter2");
    }

    #[test]
    fn message_words_are_joined() {
        let words = vec!["meet".to_string(), "at".to_string(), "dawn".to_string()];
        assert_eq!(read_message(&words, false).unwrap(), b"meet at dawn");
    }

    #[test]
    fn strips_one_trailing_newline() {
        let mut buf = b"line\n\n".to_vec();
        strip_trailing_newline(&mut buf);
        assert_eq!(buf, b"line\n");

        let mut buf = b"dos\r\n".to_vec();
        strip_trailing_newline(&mut buf);
        assert_eq!(buf, b"dos");

        let mut buf = b"none".to_vec();
        strip_trailing_newline(&mut buf);
        assert_eq!(buf, b"none");
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = tmp.path().join("custom.toml");
        std::fs::write(&config, "backend = \"tinyurl\"\ntimeout_secs = 3\n").unwrap();

        let cli = Cli::parse_from([
            "tinycrypt",
            "--config",
            config.to_str().unwrap(),
            "--backend",
            "file",
            "--store-file",
            "/tmp/x.json",
            "alias",
            "k",
        ]);
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.backend, Backend::File);
        assert_eq!(settings.timeout_secs, 3);
        assert_eq!(settings.store_file, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["tinycrypt", "--config", "/nonexistent/tc.toml", "alias", "k"]);
        assert!(matches!(
            load_settings(&cli),
            Err(TinyCryptError::ConfigError(_))
        ));
    }
}
