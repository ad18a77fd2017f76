// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password, hash it and estimate its crack time
    Generate,

    /// Estimate the crack time of an existing password
    Estimate {
        /// Password to analyse
        #[arg(required = true)]
        password: String,
    },

    /// Hash an existing password
    Digest {
        /// Password to hash
        #[arg(required = true)]
        password: String,
    },

    /// Interactive menu
    Interactive,
}
