//! Short opaque id generation.
//!
//! Ids are 7 lowercase base-36 characters from a non-cryptographic RNG.
//! Collision avoidance is probabilistic (36^7 ≈ 7.8e10 values); the store
//! does not probe for duplicates.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const LEN: usize = 7;

/// Generate a fresh 7-character base-36 id.
pub fn generate() -> String {
  let mut rng = rand::thread_rng();
  (0..LEN)
    .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
    .collect()
}
