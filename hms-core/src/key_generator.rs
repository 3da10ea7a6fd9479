// File:    key_generator.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Provides functionality for generating fresh pad keys from the fixed printable alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use rand::Rng;

/// The fixed alphabet pad keys are drawn from. Every generated key consists
/// solely of these characters, all of which survive the single-code-unit
/// sealing in [`crate::crypto`].
pub const KEY_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Generates a fresh pad key of exactly `length` characters, each drawn
/// uniformly from [`KEY_ALPHABET`]. A `length` of zero yields the empty key.
///
/// Keys are meant to be generated fresh per sealing call and never reused;
/// nothing here enforces that convention.
#[must_use]
pub fn generate_key(length: usize) -> String {
    let alphabet = KEY_ALPHABET.as_bytes();
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}
