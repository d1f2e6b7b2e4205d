pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod store;
pub mod vault;

pub use crypto::{DerivedMaterial, KeyDeriver, Salt};
pub use errors::{Result, StoreError, TinyCryptError};
pub use store::{Lookup, RemoteStore};
pub use vault::VaultClient;
