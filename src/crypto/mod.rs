//! Cryptographic primitives for TinyCrypt.
//!
//! This module provides:
//! - SHA-512 alias and cipher key derivation (`keys`)
//! - AES-256-CFB8 encryption and decryption (`encryption`)
//! - URL-safe base64 transport encoding (`encoding`)

pub mod encoding;
pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, KeyDeriver, ...};
pub use encoding::{decode_blob, encode_blob};
pub use encryption::{decrypt, encrypt};
pub use keys::{CipherKey, DerivedMaterial, KeyDeriver, Salt, ALIAS_LEN, CIPHER_KEY_LEN};
