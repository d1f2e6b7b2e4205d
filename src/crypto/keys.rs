//! Alias and cipher key derivation using SHA-512.
//!
//! From a single secret we derive:
//! - A public **alias** (the first 20 digest bytes, hex-encoded) that
//!   names the record in the remote store.
//! - A 64-byte **cipher key** (the whole digest) that feeds AES-256-CFB8.
//!
//! Both come from `SHA-512(salt || secret)`, so the same secret always
//! lands on the same alias and decrypts with the same key, no matter
//! which process does the derivation.

use std::borrow::Cow;

use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::errors::Result;

/// Length of the derived cipher key material (the full SHA-512 digest).
pub const CIPHER_KEY_LEN: usize = 64;

/// Number of digest bytes that go into the alias.
const ALIAS_BYTES: usize = 20;

/// Length of the hex alias in characters.
pub const ALIAS_LEN: usize = ALIAS_BYTES * 2;

/// Salt compiled into the binary.
///
/// Set `TINYCRYPT_SALT` at build time to namespace your aliases away
/// from every other build that kept the default.
const BUILTIN_SALT: &[u8] = match option_env!("TINYCRYPT_SALT") {
    Some(salt) => salt.as_bytes(),
    None => b"Use Your Own Salt",
};

/// The salt mixed into every derivation.
///
/// Production code uses `Salt::builtin()`. Tests inject their own salt
/// with `Salt::new` so they never collide with real aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(Cow<'static, [u8]>);

impl Salt {
    /// The compile-time salt.
    pub const fn builtin() -> Self {
        Self(Cow::Borrowed(BUILTIN_SALT))
    }

    /// An explicit salt, for isolated test namespaces.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Cow::Owned(bytes.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for Salt {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 64 bytes of cipher key material that zeroes itself on drop.
///
/// The AES-256 key is the first 32 bytes; the CFB IV is the last 16.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct CipherKey {
    bytes: [u8; CIPHER_KEY_LEN],
}

impl CipherKey {
    pub fn new(bytes: [u8; CIPHER_KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; CIPHER_KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CipherKey(..)")
    }
}

/// Everything derived from one secret.
#[derive(Debug, Clone)]
pub struct DerivedMaterial {
    alias: String,
    cipher_key: CipherKey,
}

impl DerivedMaterial {
    /// The public, 40-character lowercase hex alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn cipher_key(&self) -> &CipherKey {
        &self.cipher_key
    }
}

/// Turns secrets into aliases and cipher keys.
///
/// Holds nothing but the salt, so one deriver can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct KeyDeriver {
    salt: Salt,
}

impl KeyDeriver {
    pub fn new(salt: Salt) -> Self {
        Self { salt }
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// Derive the alias and cipher key for `secret`.
    ///
    /// Any byte string is a valid secret, the empty one included; it
    /// derives from the salt alone.
    pub fn derive(&self, secret: &[u8]) -> Result<DerivedMaterial> {
        let digest = Sha512::new()
            .chain_update(self.salt.as_bytes())
            .chain_update(secret)
            .finalize();

        let mut bytes = [0u8; CIPHER_KEY_LEN];
        bytes.copy_from_slice(&digest);

        Ok(DerivedMaterial {
            alias: hex::encode(&bytes[..ALIAS_BYTES]),
            cipher_key: CipherKey::new(bytes),
        })
    }
}
