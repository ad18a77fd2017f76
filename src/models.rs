// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::crypto::DigestError;

/// Digest selectable for a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    /// MD4 over the UTF-16LE encoding of the password
    Ntlm,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 3] = [DigestAlgorithm::Md5, DigestAlgorithm::Sha1, DigestAlgorithm::Ntlm];

    /// Length of the rendered hex digest
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Md5 | DigestAlgorithm::Ntlm => 32,
            DigestAlgorithm::Sha1 => 40,
        }
    }

    // Legacy digests are kept only to demonstrate how weak they are
    pub fn is_legacy(&self) -> bool {
        matches!(self, DigestAlgorithm::Ntlm)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Md5 => write!(f, "MD5"),
            DigestAlgorithm::Sha1 => write!(f, "SHA1"),
            DigestAlgorithm::Ntlm => write!(f, "NTLM"),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            "ntlm" => Ok(DigestAlgorithm::Ntlm),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

// Password composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub alphanumeric_count: usize,
    pub symbol_count: usize,
}

impl GenerationRequest {
    pub fn new(alphanumeric_count: usize, symbol_count: usize) -> Self {
        Self { alphanumeric_count, symbol_count }
    }

    pub fn total_length(&self) -> usize {
        self.alphanumeric_count + self.symbol_count
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestResult {
    pub algorithm: DigestAlgorithm,
    /// Lowercase hexadecimal digest
    pub hex_digest: String,
    /// Wall-clock time spent inside the digest computation
    pub duration_millis: f64,
}

// Full generate-and-hash request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRequest {
    pub algorithm: DigestAlgorithm,
    pub alphanumeric_count: usize,
    pub symbol_count: usize,
}

impl HashRequest {
    pub fn generation(&self) -> GenerationRequest {
        GenerationRequest::new(self.alphanumeric_count, self.symbol_count)
    }
}

impl Default for HashRequest {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::Md5,
            alphanumeric_count: 8,
            symbol_count: 3,
        }
    }
}

/// How the estimator arrived at its character pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateConfidence {
    /// Pool taken from the requested alphabet counts
    Declared,
    /// Pool guessed from the characters present in the password
    Inferred,
    /// No usable estimate
    Indeterminate,
}

/// Everything returned by one generate-and-hash cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashReport {
    pub password: String,
    pub algorithm: DigestAlgorithm,
    pub digest_hex: String,
    pub crack_estimate: String,
    pub estimate_confidence: EstimateConfidence,
    pub digest_duration_millis: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selectors_case_insensitively() {
        assert_eq!("MD5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
        assert_eq!("sha1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
        assert_eq!(" Ntlm ".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Ntlm);
    }

    #[test]
    fn unknown_selector_is_unsupported() {
        match "sha256".parse::<DigestAlgorithm>() {
            Err(DigestError::UnsupportedAlgorithm(name)) => assert_eq!(name, "sha256"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn display_matches_report_labels() {
        let labels: Vec<String> = DigestAlgorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels, vec!["MD5", "SHA1", "NTLM"]);
    }

    #[test]
    fn default_request_matches_form_defaults() {
        let request = HashRequest::default();
        assert_eq!(request.algorithm, DigestAlgorithm::Md5);
        assert_eq!(request.generation().total_length(), 11);
    }

    #[test]
    fn serializes_algorithm_in_lowercase() {
        let json = serde_json::to_string(&DigestAlgorithm::Ntlm).unwrap();
        assert_eq!(json, "\"ntlm\"");
    }
}
