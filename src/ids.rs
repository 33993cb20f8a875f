//! Record identifier generation.
//!
//! Ids are short random base-36 strings, optionally entity-prefixed
//! (`p…` prescriptions, `a…` appointments, `d…` documents). Collision
//! probability over one session's data is negligible; uniqueness is
//! probabilistic, not checked.

use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default suffix length, 36^7 ≈ 7.8e10 possible values.
const SUFFIX_LEN: usize = 7;

/// A random base-36 string of `len` characters.
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// An entity-prefixed record id, e.g. `p3k9x0mz`.
pub fn record_id(prefix: char) -> String {
    let mut id = String::with_capacity(1 + SUFFIX_LEN);
    id.push(prefix);
    id.push_str(&random_base36(SUFFIX_LEN));
    id
}

/// An unprefixed actor id for self-registered users.
pub fn actor_id() -> String {
    random_base36(9)
}
