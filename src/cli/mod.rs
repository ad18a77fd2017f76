// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

use crate::core::Config;
use crate::models::{DigestAlgorithm, HashRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a password, hash it and estimate how long it would take to crack", long_about = None)]
pub struct Args {
    /// Print results as a single JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// Digest algorithm
    #[arg(long, short, value_enum, ignore_case = true, global = true)]
    pub algorithm: Option<DigestAlgorithm>,

    /// Number of alphanumeric characters
    #[arg(long = "alnum-count", global = true)]
    pub alnum_count: Option<usize>,

    /// Number of symbol characters
    #[arg(long = "symbol-count", global = true)]
    pub symbol_count: Option<usize>,

    /// Command to execute (defaults to generate)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Merge the flags over the configured defaults.
    pub fn request(&self, config: &Config) -> HashRequest {
        HashRequest {
            algorithm: self.algorithm.unwrap_or(config.default_algorithm),
            alphanumeric_count: self.alnum_count.unwrap_or(config.default_alnum_count),
            symbol_count: self.symbol_count.unwrap_or(config.default_symbol_count),
        }
    }
}
