// src/generators/charset.rs

/// Alphanumeric alphabet, in this fixed order.
pub const ALPHANUMERIC_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Symbol alphabet.
pub const SYMBOL_ALPHABET: &[u8] = b"!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub const LOWERCASE_POOL: usize = 26;
pub const UPPERCASE_POOL: usize = 26;
pub const DIGIT_POOL: usize = 10;

pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOL_ALPHABET.contains(&(c as u8))
}
