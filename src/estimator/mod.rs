// src/estimator/mod.rs
//! Brute-force crack-time estimation.
//!
//! The search space is `pool_size ^ length`, computed exactly as a big
//! integer and only turned into a float for the final division by the
//! assumed guess rate. The result is an order-of-magnitude label.

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::generators::charset::{
    is_symbol, ALPHANUMERIC_ALPHABET, DIGIT_POOL, LOWERCASE_POOL, SYMBOL_ALPHABET, UPPERCASE_POOL,
};
use crate::models::EstimateConfidence;

mod ladder;

pub use ladder::{describe_seconds, TimeTier};

/// Assumed offline attack rate.
pub const GUESSES_PER_SECOND: u64 = 10_000_000_000;

// Beyond this the search space is not materialised at all
const MAX_COMBINATION_BITS: u64 = 1 << 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackTime {
    pub pool_size: usize,
    pub length: usize,
    pub seconds: f64,
    pub tier: TimeTier,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indeterminate {
    EmptyPassword,
    UnknownPool,
    Astronomical,
}

impl Indeterminate {
    pub fn label(&self) -> &'static str {
        match self {
            Indeterminate::EmptyPassword => "Cannot estimate (empty password)",
            Indeterminate::UnknownPool => "Cannot determine character pool",
            Indeterminate::Astronomical => "Astronomical number of combinations (practically impossible)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Estimate {
    /// Pool size came from the requested alphabet counts.
    Confident(CrackTime),
    /// Pool size was guessed from the password's characters; lower confidence.
    Inferred(CrackTime),
    Indeterminate(Indeterminate),
}

impl Estimate {
    pub fn label(&self) -> &str {
        match self {
            Estimate::Confident(time) | Estimate::Inferred(time) => &time.label,
            Estimate::Indeterminate(reason) => reason.label(),
        }
    }

    pub fn crack_time(&self) -> Option<&CrackTime> {
        match self {
            Estimate::Confident(time) | Estimate::Inferred(time) => Some(time),
            Estimate::Indeterminate(_) => None,
        }
    }

    pub fn confidence(&self) -> EstimateConfidence {
        match self {
            Estimate::Confident(_) => EstimateConfidence::Declared,
            Estimate::Inferred(_) => EstimateConfidence::Inferred,
            Estimate::Indeterminate(_) => EstimateConfidence::Indeterminate,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pool size implied by the requested counts. The two alphabets add up.
pub fn declared_pool_size(alphanumeric_count: usize, symbol_count: usize) -> usize {
    let mut pool = 0;
    if alphanumeric_count > 0 {
        pool += ALPHANUMERIC_ALPHABET.len();
    }
    if symbol_count > 0 {
        pool += SYMBOL_ALPHABET.len();
    }
    pool
}

/// Pool size guessed from the character classes present in `password`.
pub fn inferred_pool_size(password: &str) -> usize {
    let mut pool = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool += LOWERCASE_POOL;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool += UPPERCASE_POOL;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += DIGIT_POOL;
    }
    if password.chars().any(is_symbol) {
        pool += SYMBOL_ALPHABET.len();
    }
    pool
}

/// Exhaustive search space for `length` characters drawn from `pool_size`.
///
/// `None` when the value is too large to build.
pub fn combinations(pool_size: usize, length: usize) -> Option<BigUint> {
    let exponent = u32::try_from(length).ok()?;
    let pool_bits = u64::from(usize::BITS - pool_size.leading_zeros());
    if pool_bits.saturating_mul(u64::from(exponent)) > MAX_COMBINATION_BITS {
        return None;
    }
    Some(BigUint::from(pool_size).pow(exponent))
}

/// Time to exhaust the search space at [`GUESSES_PER_SECOND`].
pub fn crack_time(pool_size: usize, length: usize) -> Option<CrackTime> {
    let space = combinations(pool_size, length)?.to_f64()?;
    let seconds = space / GUESSES_PER_SECOND as f64;
    let (tier, label) = describe_seconds(seconds);
    Some(CrackTime { pool_size, length, seconds, tier, label })
}

/// Estimate how long a brute-force attack on `password` would take.
///
/// The counts describe how the password was generated. When both are zero the
/// pool is inferred from the password content and the result is
/// [`Estimate::Inferred`].
pub fn estimate(password: &str, alphanumeric_count: usize, symbol_count: usize) -> Estimate {
    if password.is_empty() {
        return Estimate::Indeterminate(Indeterminate::EmptyPassword);
    }

    let length = password.chars().count();
    let declared = declared_pool_size(alphanumeric_count, symbol_count);
    let (pool_size, inferred) = if declared > 0 {
        (declared, false)
    } else {
        log::debug!("no declared pool, inferring from password content");
        (inferred_pool_size(password), true)
    };

    if pool_size == 0 {
        return Estimate::Indeterminate(Indeterminate::UnknownPool);
    }

    match crack_time(pool_size, length) {
        Some(time) if inferred => Estimate::Inferred(time),
        Some(time) => Estimate::Confident(time),
        None => {
            log::warn!("search space for pool {} and length {} is too large to compute", pool_size, length);
            Estimate::Indeterminate(Indeterminate::Astronomical)
        }
    }
}

/// String form of [`estimate`].
pub fn estimate_label(password: &str, alphanumeric_count: usize, symbol_count: usize) -> String {
    estimate(password, alphanumeric_count, symbol_count).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_indeterminate() {
        for &(alnum, symbols) in &[(0, 0), (8, 0), (0, 3), (20, 16)] {
            let result = estimate("", alnum, symbols);
            assert_eq!(result, Estimate::Indeterminate(Indeterminate::EmptyPassword));
            assert_eq!(result.label(), "Cannot estimate (empty password)");
        }
    }

    #[test]
    fn declared_pools_add_up() {
        assert_eq!(declared_pool_size(0, 0), 0);
        assert_eq!(declared_pool_size(8, 0), 62);
        assert_eq!(declared_pool_size(0, 3), 30);
        assert_eq!(declared_pool_size(8, 3), 92);
    }

    #[test]
    fn eight_alphanumerics_take_hours() {
        let result = estimate("abcdefgh", 8, 0);
        let time = result.crack_time().unwrap();
        assert_eq!(time.pool_size, 62);
        assert_eq!(time.tier, TimeTier::Hours);
        assert_eq!(result.label(), "6.1 hours");
        assert_eq!(result.confidence(), EstimateConfidence::Declared);
    }

    #[test]
    fn exact_seconds_render_on_the_ladder() {
        // 450e9 / 10e9 = 45 s, 900e9 / 10e9 = 90 s
        assert_eq!(crack_time(450_000_000_000, 1).unwrap().label, "45.0 seconds");
        assert_eq!(crack_time(900_000_000_000, 1).unwrap().label, "1.5 minutes");
    }

    #[test]
    fn longer_passwords_never_rank_weaker() {
        let mut previous = crack_time(62, 1).unwrap();
        for length in 2..=40 {
            let current = crack_time(62, length).unwrap();
            assert!(current.seconds > previous.seconds);
            assert!(current.tier >= previous.tier, "length {} dropped a tier", length);
            previous = current;
        }
        assert_eq!(previous.tier, TimeTier::Eons);
    }

    #[test]
    fn infers_pool_when_no_counts_given() {
        let result = estimate("abc123", 0, 0);
        assert_eq!(result.confidence(), EstimateConfidence::Inferred);
        assert_eq!(result.crack_time().unwrap().pool_size, 36);

        assert_eq!(inferred_pool_size("aB3!"), 26 + 26 + 10 + 30);
    }

    #[test]
    fn unknown_characters_leave_pool_undetermined() {
        let result = estimate("ééé", 0, 0);
        assert_eq!(result, Estimate::Indeterminate(Indeterminate::UnknownPool));
        assert_eq!(result.to_string(), "Cannot determine character pool");
    }

    #[test]
    fn declared_counts_override_password_content() {
        // Symbols present but not requested: the declared alphanumeric pool wins
        let result = estimate("abc!!", 3, 0);
        assert_eq!(result.confidence(), EstimateConfidence::Declared);
        assert_eq!(result.crack_time().unwrap().pool_size, 62);

        // Requested alphabet absent from the content is still counted
        let result = estimate("abcde", 5, 3);
        assert_eq!(result.crack_time().unwrap().pool_size, 92);
    }

    #[test]
    fn huge_search_space_is_astronomical() {
        let password = "a".repeat(200_000);
        let result = estimate(&password, 1, 0);
        assert_eq!(result, Estimate::Indeterminate(Indeterminate::Astronomical));
        assert_eq!(
            estimate_label(&password, 1, 0),
            "Astronomical number of combinations (practically impossible)"
        );
    }

    #[test]
    fn float_overflow_reads_as_eons() {
        let password = "a".repeat(1_100);
        let result = estimate(&password, 1, 0);
        let time = result.crack_time().unwrap();
        assert!(time.seconds.is_infinite());
        assert_eq!(result.label(), "Countless eons (extremely strong)");
    }

    #[test]
    fn estimate_is_repeatable() {
        assert_eq!(estimate("Xy9#Xy9#", 6, 2), estimate("Xy9#Xy9#", 6, 2));
    }
}
