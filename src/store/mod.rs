//! Remote store adapters — where encrypted blobs live.
//!
//! The core only talks to the `RemoteStore` trait.  This module provides:
//! - `MemoryStore`, an in-process map (`memory`)
//! - `FileStore`, a local JSON file (`file`)
//! - `TinyUrlStore`, the public TinyURL shortener (`tinyurl`, behind the
//!   `tinyurl` feature)

pub mod file;
pub mod memory;
#[cfg(feature = "tinyurl")]
pub mod tinyurl;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "tinyurl")]
pub use tinyurl::TinyUrlStore;

use crate::errors::StoreError;

/// Result of resolving an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The alias resolves to this value.
    Found(String),
    /// The store has never heard of the alias (or has evicted it).
    NotFound,
}

/// An uncontrolled alias -> string store.
///
/// Implementations must report an unknown alias as `Lookup::NotFound`
/// and reserve `Err` for everything else (network, protocol, I/O), so
/// callers can tell "nothing here yet" from "we could not find out".
pub trait RemoteStore {
    /// Associate `alias` with `value`, silently replacing any old value.
    fn put(&self, alias: &str, value: &str) -> Result<(), StoreError>;

    /// Resolve `alias`.
    fn get(&self, alias: &str) -> Result<Lookup, StoreError>;
}

impl<S: RemoteStore + ?Sized> RemoteStore for &S {
    fn put(&self, alias: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(alias, value)
    }

    fn get(&self, alias: &str) -> Result<Lookup, StoreError> {
        (**self).get(alias)
    }
}

impl<S: RemoteStore + ?Sized> RemoteStore for Box<S> {
    fn put(&self, alias: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(alias, value)
    }

    fn get(&self, alias: &str) -> Result<Lookup, StoreError> {
        (**self).get(alias)
    }
}
