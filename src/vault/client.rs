//! Push and pull encrypted messages through a `RemoteStore`.
//!
//! `VaultClient` ties the crypto layer to a store so the rest of the
//! application can write `client.push(key, msg)` and `client.pull(key)`.
//! Each call is one independent round trip: no retries, no caching.

use crate::crypto::{decode_blob, encode_blob, KeyDeriver};
use crate::errors::{Result, StoreError};
use crate::store::{Lookup, RemoteStore};

pub struct VaultClient<S> {
    deriver: KeyDeriver,
    store: S,
}

impl<S: RemoteStore> VaultClient<S> {
    /// A client using the built-in salt.
    pub fn new(store: S) -> Self {
        Self::with_deriver(KeyDeriver::default(), store)
    }

    /// A client with an explicit deriver, e.g. one with a test salt.
    pub fn with_deriver(deriver: KeyDeriver, store: S) -> Self {
        Self { deriver, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The public alias a secret maps to.
    pub fn alias(&self, secret: &[u8]) -> Result<String> {
        Ok(self.deriver.derive(secret)?.alias().to_string())
    }

    /// Encrypt `message` and store it under the alias derived from `secret`.
    ///
    /// Succeeds as soon as the store accepts the write.
    pub fn push(&self, secret: &[u8], message: &[u8]) -> Result<()> {
        let derived = self.deriver.derive(secret)?;
        let ciphertext = derived.cipher_key().encrypt(message)?;
        let blob = encode_blob(&ciphertext);

        self.store.put(derived.alias(), &blob)?;
        Ok(())
    }

    /// Fetch and decrypt the message stored under `secret`.
    ///
    /// Returns `Ok(None)` when the store does not know the alias, which is
    /// the normal state before the first push or after an eviction.  Any
    /// other store failure is an error.
    pub fn pull(&self, secret: &[u8]) -> Result<Option<Vec<u8>>> {
        let derived = self.deriver.derive(secret)?;

        let blob = match self.store.get(derived.alias())? {
            Lookup::Found(blob) => blob,
            Lookup::NotFound => return Ok(None),
        };

        let ciphertext = decode_blob(&blob).map_err(|e| {
            StoreError::MalformedResponse(format!(
                "value under alias {} is not a blob: {e}",
                derived.alias()
            ))
        })?;

        Ok(Some(derived.cipher_key().decrypt(&ciphertext)?))
    }
}
