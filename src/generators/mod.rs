// src/generators/mod.rs
pub mod charset;
pub mod password;

pub use password::{generate, generate_with_rng, GeneratorError, PasswordGenerator, MAX_PASSWORD_LENGTH};
