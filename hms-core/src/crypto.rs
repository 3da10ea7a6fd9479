// File:    crypto.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Handles the core cryptographic operations: XOR pad sealing and unsealing with a reversible base64 surface.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the core cryptographic operations.
//!
//! Plaintext and key are treated as sequences of single-byte code units
//! (Latin-1). A key shorter than the plaintext is stretched by repeating
//! itself, truncated to the plaintext length; the empty key cannot be
//! lengthened that way and is used as-is, with missing key positions
//! contributing zero to the XOR. This repeats rather than extends the pad,
//! so the scheme is not a true one-time pad and must not be relied on as a
//! security primitive.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while sealing text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// A character does not fit in a single byte and cannot be sealed.
    #[error("character '{0}' cannot be encoded as a single code unit")]
    UnencodableCharacter(char),
}

/// The sealed form of a plaintext: base64 ciphertext plus the base64 pad
/// key that produced it. Both are safe to keep in a text-only store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sealed {
    /// Base64 encoding of the XOR output.
    pub ciphertext: String,
    /// Base64 encoding of the (possibly stretched) key.
    pub key: String,
}

/// Seals `plaintext` with `key`, returning both halves base64-encoded.
///
/// The key is stretched by self-repetition when shorter than the plaintext
/// and stored in its stretched form, so the returned pair always unseals on
/// its own.
///
/// # Errors
///
/// Returns [`CryptoError::UnencodableCharacter`] if the plaintext or key
/// contains a character above U+00FF.
pub fn encrypt(plaintext: &str, key: &str) -> Result<Sealed, CryptoError> {
    let plain = code_units(plaintext)?;
    let pad = stretch_key(&code_units(key)?, plain.len());

    let ciphertext: Vec<u8> = plain
        .iter()
        .enumerate()
        .map(|(i, &unit)| unit ^ pad.get(i).copied().unwrap_or(0))
        .collect();

    Ok(Sealed {
        ciphertext: STANDARD.encode(&ciphertext),
        key: STANDARD.encode(&pad),
    })
}

/// Unseals a base64 `ciphertext` with its base64 `key`.
///
/// Returns `None` when either argument is not valid base64. This function
/// never panics; a key shorter than the ciphertext leaves the uncovered
/// tail of the ciphertext unchanged.
#[must_use]
pub fn decrypt(ciphertext: &str, key: &str) -> Option<String> {
    let ciphertext = STANDARD.decode(ciphertext).ok()?;
    let key = STANDARD.decode(key).ok()?;

    let plaintext = ciphertext
        .iter()
        .enumerate()
        .map(|(i, &unit)| char::from(unit ^ key.get(i).copied().unwrap_or(0)))
        .collect();

    Some(plaintext)
}

/// Repeats `key` until it covers `target` units, truncated to `target`.
/// A key that already covers the target, or an empty key, is returned
/// unchanged.
fn stretch_key(key: &[u8], target: usize) -> Vec<u8> {
    if key.is_empty() || key.len() >= target {
        return key.to_vec();
    }
    key.iter().copied().cycle().take(target).collect()
}

/// Maps each character to its single-byte code unit.
fn code_units(text: &str) -> Result<Vec<u8>, CryptoError> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| CryptoError::UnencodableCharacter(c)))
        .collect()
}
