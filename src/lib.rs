// src/lib.rs
//! Password generation, hashing and brute-force crack-time estimation.
//!
//! ```
//! use rust_passhash::models::{DigestAlgorithm, HashRequest};
//!
//! let request = HashRequest { algorithm: DigestAlgorithm::Sha1, alphanumeric_count: 12, symbol_count: 4 };
//! let report = rust_passhash::core::run(&request).unwrap();
//! assert_eq!(report.password.len(), 16);
//! assert_eq!(report.digest_hex.len(), 40);
//! ```

pub mod cli;
pub mod core;
pub mod crypto;
pub mod estimator;
pub mod generators;
pub mod logging;
pub mod models;

pub use crate::core::{reestimate, run, EngineError, ErrorKind};
pub use crate::crypto::{digest, digest_by_name, DigestError};
pub use crate::estimator::{estimate, estimate_label, Estimate};
pub use crate::generators::{generate, GeneratorError, PasswordGenerator};
