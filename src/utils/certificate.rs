//! Display identifiers for certificates.
//!
//! Ids have the shape `CERT-<SKILLCODE>-<TIMESUFFIX>-<RANDOM>`. They carry
//! six timestamp digits and four base-36 characters, so two certificates
//! issued close together can collide. Nothing checks ids against a store;
//! treat them as labels, not keys.

use chrono::{DateTime, Utc};
use rand::Rng;

const SKILL_CODE_LEN: usize = 3;
const RANDOM_LEN: usize = 4;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const EMPTY_SKILL_LETTER: char = 'X';

/// Uppercased ASCII letters of `skill`, cut or padded to three characters.
/// Short codes repeat their last letter ("C++" gives "CCC"); a skill with no
/// letters gives "XXX".
pub fn skill_code(skill: &str) -> String {
    let mut code: String = skill
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .take(SKILL_CODE_LEN)
        .collect();

    let pad = code.chars().next_back().unwrap_or(EMPTY_SKILL_LETTER);
    while code.len() < SKILL_CODE_LEN {
        code.push(pad);
    }
    code
}

/// Last six digits of the millisecond timestamp.
pub fn time_suffix(at: DateTime<Utc>) -> String {
    format!("{:06}", at.timestamp_millis().rem_euclid(1_000_000))
}

pub fn random_token(rng: &mut impl Rng) -> String {
    (0..RANDOM_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

pub fn certificate_id(skill: &str, at: DateTime<Utc>, rng: &mut impl Rng) -> String {
    format!(
        "CERT-{}-{}-{}",
        skill_code(skill),
        time_suffix(at),
        random_token(rng)
    )
}
