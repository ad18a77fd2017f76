// src/crypto.rs
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use md4::Md4;
use md5::Md5;
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::models::{DigestAlgorithm, DigestResult};

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Digest computation failed: {0}")]
    DigestComputation(String),
}

pub type Result<T> = std::result::Result<T, DigestError>;

/// Encode a password the way NTLM expects it: each UTF-16 code unit as
/// low byte then high byte.
pub fn ntlm_encode(password: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(password.len() * 2);
    for unit in password.encode_utf16() {
        bytes.push((unit & 0xFF) as u8);
        bytes.push((unit >> 8) as u8);
    }
    bytes
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn compute(algorithm: DigestAlgorithm, password: &str) -> String {
    match algorithm {
        DigestAlgorithm::Md5 => hex_digest::<Md5>(password.as_bytes()),
        DigestAlgorithm::Sha1 => hex_digest::<Sha1>(password.as_bytes()),
        DigestAlgorithm::Ntlm => hex_digest::<Md4>(&ntlm_encode(password)),
    }
}

/// Hash `password` with `algorithm`, timing only the digest itself.
///
/// The NTLM byte transform belongs to the digest, so it is inside the timed
/// section.
pub fn digest(algorithm: DigestAlgorithm, password: &str) -> Result<DigestResult> {
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| compute(algorithm, password)));
    let elapsed = start.elapsed();

    let hex_digest = outcome.map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown failure".to_string());
        log::error!("{} digest aborted: {}", algorithm, message);
        DigestError::DigestComputation(message)
    })?;

    Ok(DigestResult {
        algorithm,
        hex_digest,
        duration_millis: elapsed.as_secs_f64() * 1000.0,
    })
}

/// Same as [`digest`], with the algorithm given by name.
pub fn digest_by_name(selector: &str, password: &str) -> Result<DigestResult> {
    let algorithm: DigestAlgorithm = selector.parse()?;
    digest(algorithm, password)
}
