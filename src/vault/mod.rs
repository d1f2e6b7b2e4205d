//! Vault module — encrypted messages under derived aliases.
//!
//! This module provides `VaultClient`, which derives an alias and key
//! from a secret, encrypts, and talks to a `RemoteStore` (`client`).

pub mod client;

pub use client::VaultClient;
