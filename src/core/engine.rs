// src/core/engine.rs
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::crypto::{self, DigestError};
use crate::estimator::{self, Estimate};
use crate::generators::{self, GeneratorError};
use crate::models::{HashReport, HashRequest};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Digest(#[from] DigestError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidLength,
    UnsupportedAlgorithm,
    DigestComputation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidLength => write!(f, "invalid_length"),
            ErrorKind::UnsupportedAlgorithm => write!(f, "unsupported_algorithm"),
            ErrorKind::DigestComputation => write!(f, "digest_computation"),
        }
    }
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Generator(GeneratorError::InvalidLength | GeneratorError::TooLong { .. }) => {
                ErrorKind::InvalidLength
            }
            EngineError::Digest(DigestError::UnsupportedAlgorithm(_)) => ErrorKind::UnsupportedAlgorithm,
            EngineError::Digest(DigestError::DigestComputation(_)) => ErrorKind::DigestComputation,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Generate a password, estimate its crack time and hash it.
pub fn run(request: &HashRequest) -> Result<HashReport> {
    log::debug!(
        "generating password: {} alphanumeric, {} symbols",
        request.alphanumeric_count,
        request.symbol_count
    );
    let password = generators::generate(request.alphanumeric_count, request.symbol_count)?;

    let estimate = estimator::estimate(&password, request.alphanumeric_count, request.symbol_count);
    log::debug!("crack estimate: {:?}", estimate.confidence());

    let digest = crypto::digest(request.algorithm, &password)?;
    log::info!("{} digest computed in {:.4} ms", digest.algorithm, digest.duration_millis);
    if request.algorithm.is_legacy() {
        log::warn!("{} is a legacy digest and offers no real protection", request.algorithm);
    }

    Ok(HashReport {
        password,
        algorithm: digest.algorithm,
        digest_hex: digest.hex_digest,
        crack_estimate: estimate.label().to_string(),
        estimate_confidence: estimate.confidence(),
        digest_duration_millis: digest.duration_millis,
    })
}

/// Re-run the estimator on an existing password after the counts changed.
pub fn reestimate(password: &str, alphanumeric_count: usize, symbol_count: usize) -> Estimate {
    estimator::estimate(password, alphanumeric_count, symbol_count)
}
