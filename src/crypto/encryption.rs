//! AES-256-CFB8 stream encryption.
//!
//! CFB with an 8-bit segment turns AES into a self-synchronizing stream
//! cipher: no padding, no nonce prefix, no auth tag.  The ciphertext is
//! exactly as long as the plaintext.
//!
//! Key material is the 64-byte `CipherKey` from `keys`:
//!   [ 32-byte AES key | 16 unused bytes | 16-byte IV ]
//!
//! This gives confidentiality only.  A tampered ciphertext decrypts to
//! garbage without any error.

use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use aes::Aes256;

use super::keys::{CipherKey, CIPHER_KEY_LEN};
use crate::errors::{Result, TinyCryptError};

type Aes256Cfb8Enc = cfb8::Encryptor<Aes256>;
type Aes256Cfb8Dec = cfb8::Decryptor<Aes256>;

/// AES-256 key size in bytes.
const KEY_LEN: usize = 32;

/// CFB initialization vector size in bytes (one AES block).
const IV_LEN: usize = 16;

/// Split raw key material into the AES key and the IV.
fn split_key_material(cipher_key: &[u8]) -> Result<(&[u8], &[u8])> {
    if cipher_key.len() != CIPHER_KEY_LEN {
        return Err(TinyCryptError::InvalidKeyLength {
            expected: CIPHER_KEY_LEN,
            actual: cipher_key.len(),
        });
    }
    Ok((
        &cipher_key[..KEY_LEN],
        &cipher_key[CIPHER_KEY_LEN - IV_LEN..],
    ))
}

/// Encrypt `plaintext` with 64 bytes of key material.
pub fn encrypt(cipher_key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let (key, iv) = split_key_material(cipher_key)?;
    let cipher = Aes256Cfb8Enc::new_from_slices(key, iv).map_err(|_| {
        TinyCryptError::InvalidKeyLength {
            expected: CIPHER_KEY_LEN,
            actual: cipher_key.len(),
        }
    })?;

    let mut buf = plaintext.to_vec();
    cipher.encrypt(&mut buf);
    Ok(buf)
}

/// Decrypt data that was produced by `encrypt` under the same key material.
pub fn decrypt(cipher_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let (key, iv) = split_key_material(cipher_key)?;
    let cipher = Aes256Cfb8Dec::new_from_slices(key, iv).map_err(|_| {
        TinyCryptError::InvalidKeyLength {
            expected: CIPHER_KEY_LEN,
            actual: cipher_key.len(),
        }
    })?;

    let mut buf = ciphertext.to_vec();
    cipher.decrypt(&mut buf);
    Ok(buf)
}

impl CipherKey {
    /// Encrypt `plaintext` under this key.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt(self.as_bytes(), plaintext)
    }

    /// Decrypt `ciphertext` under this key.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(self.as_bytes(), ciphertext)
    }
}
