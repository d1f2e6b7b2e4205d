//! `tinycrypt alias` — print the public alias a key maps to.

use crate::cli::resolve_secret;
use crate::crypto::KeyDeriver;
use crate::errors::Result;

/// Execute the `alias` command.
///
/// Pure derivation: no store is contacted and no config is read.
pub fn execute(key: Option<&str>) -> Result<()> {
    let secret = resolve_secret(key)?;
    let derived = KeyDeriver::default().derive(secret.as_bytes())?;
    println!("{}", derived.alias());
    Ok(())
}
