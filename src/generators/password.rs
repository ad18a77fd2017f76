// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::charset::{ALPHANUMERIC_ALPHABET, SYMBOL_ALPHABET};
use crate::estimator::{self, Estimate};
use crate::models::GenerationRequest;

/// Longest password the generator will build.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Total password length must be greater than zero")]
    InvalidLength,

    #[error("Total password length must not exceed {max} characters")]
    TooLong { max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

fn push_random<R: Rng + ?Sized>(rng: &mut R, out: &mut Vec<u8>, alphabet: &[u8], count: usize) {
    if count == 0 {
        return;
    }
    let dist = Uniform::from(0..alphabet.len());
    for _ in 0..count {
        out.push(alphabet[dist.sample(rng)]);
    }
}

/// Generate a password using the supplied random source.
///
/// The alphanumeric block is drawn first, then the symbol block, and the
/// whole sequence is Fisher–Yates shuffled so neither block keeps its
/// position.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    alphanumeric_count: usize,
    symbol_count: usize,
) -> Result<String> {
    let total = alphanumeric_count
        .checked_add(symbol_count)
        .ok_or(GeneratorError::TooLong { max: MAX_PASSWORD_LENGTH })?;
    if total == 0 {
        return Err(GeneratorError::InvalidLength);
    }
    if total > MAX_PASSWORD_LENGTH {
        return Err(GeneratorError::TooLong { max: MAX_PASSWORD_LENGTH });
    }

    let mut chars = Vec::with_capacity(total);
    push_random(rng, &mut chars, ALPHANUMERIC_ALPHABET, alphanumeric_count);
    push_random(rng, &mut chars, SYMBOL_ALPHABET, symbol_count);
    chars.shuffle(rng);

    // Both alphabets are ASCII
    Ok(chars.into_iter().map(char::from).collect())
}

/// Generate a password from the operating system CSPRNG.
pub fn generate(alphanumeric_count: usize, symbol_count: usize) -> Result<String> {
    generate_with_rng(&mut OsRng, alphanumeric_count, symbol_count)
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, request: &GenerationRequest) -> Result<String> {
        generate(request.alphanumeric_count, request.symbol_count)
    }

    pub fn estimate(&self, password: &str, request: &GenerationRequest) -> Estimate {
        estimator::estimate(password, request.alphanumeric_count, request.symbol_count)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{is_alphanumeric, is_symbol};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn composition(password: &str) -> (usize, usize) {
        let alnum = password.chars().filter(|c| is_alphanumeric(*c)).count();
        let symbols = password.chars().filter(|c| is_symbol(*c)).count();
        (alnum, symbols)
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(generate(0, 0), Err(GeneratorError::InvalidLength));
    }

    #[test]
    fn oversized_requests_are_rejected() {
        let too_long = Err(GeneratorError::TooLong { max: MAX_PASSWORD_LENGTH });
        assert_eq!(generate(usize::MAX, 1), too_long);
        assert_eq!(generate(usize::MAX, 0), too_long);
        assert_eq!(generate(0, usize::MAX), too_long);
        assert_eq!(generate(MAX_PASSWORD_LENGTH, 1), too_long);
    }

    #[test]
    fn longest_allowed_password_is_built() {
        let password = generate(MAX_PASSWORD_LENGTH - 10, 10).unwrap();
        assert_eq!(password.len(), MAX_PASSWORD_LENGTH);
    }

    #[test]
    fn composition_matches_request() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for &(alnum, symbols) in &[(8, 0), (0, 5), (12, 3), (1, 1), (20, 16)] {
            let password = generate_with_rng(&mut rng, alnum, symbols).unwrap();
            assert_eq!(password.chars().count(), alnum + symbols);
            assert_eq!(composition(&password), (alnum, symbols));
        }
    }

    #[test]
    fn os_rng_generation_respects_request() {
        let password = generate(16, 5).unwrap();
        assert_eq!(password.len(), 21);
        assert_eq!(composition(&password), (16, 5));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(42), 12, 4).unwrap();
        let second = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(42), 12, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn symbols_do_not_stay_at_the_end() {
        // Without the shuffle every symbol would sit in the trailing block
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let moved = (0..50).any(|_| {
            let password = generate_with_rng(&mut rng, 8, 8).unwrap();
            password.chars().take(8).any(is_symbol)
        });
        assert!(moved);
    }

    #[test]
    fn generator_struct_delegates() {
        let generator = PasswordGenerator::new();
        let request = GenerationRequest::new(5, 3);
        let password = generator.generate_password(&request).unwrap();
        assert_eq!(composition(&password), (5, 3));
        assert!(matches!(generator.estimate(&password, &request), Estimate::Confident(_)));
    }
}
