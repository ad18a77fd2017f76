// src/cli/menu.rs
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use inquire::{InquireError, Select};

use crate::cli::handlers::{format_estimate, format_report};
use crate::core::{self, Config};
use crate::models::{DigestAlgorithm, HashRequest};

const GENERATE: &str = "🔐  Generate password & hash";
const CHANGE_ALGORITHM: &str = "🧮  Change hash algorithm";
const CHANGE_COUNTS: &str = "🔢  Change character counts";
const EXIT: &str = "❌  Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CountChoice {
    count: usize,
    noun: &'static str,
}

impl fmt::Display for CountChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            write!(f, "0 (None)")
        } else {
            write!(f, "{} {}", self.count, self.noun)
        }
    }
}

fn count_choices(counts: &[usize], noun: &'static str) -> Vec<CountChoice> {
    counts.iter().map(|&count| CountChoice { count, noun }).collect()
}

// Starting cursor for the current value, first entry when it is not offered
fn cursor_for<T: PartialEq>(items: &[T], current: &T) -> usize {
    items.iter().position(|item| item == current).unwrap_or(0)
}

fn pick_count(prompt: &str, counts: &[usize], noun: &'static str, current: usize) -> Result<Option<usize>, InquireError> {
    let choices = count_choices(counts, noun);
    let cursor = cursor_for(counts, &current);
    Ok(Select::new(prompt, choices)
        .with_starting_cursor(cursor)
        .prompt_skippable()?
        .map(|choice| choice.count))
}

fn pick_algorithm(current: DigestAlgorithm) -> Result<Option<DigestAlgorithm>, InquireError> {
    let algorithms = DigestAlgorithm::ALL.to_vec();
    let cursor = cursor_for(&algorithms, &current);
    Select::new("Hash algorithm:", algorithms)
        .with_starting_cursor(cursor)
        .prompt_skippable()
}

fn is_interrupt(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║    🦀 PASSWORD GENERATOR & HASHER    ║");
    println!("╚══════════════════════════════════════╝");

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        // Prompts see Ctrl+C as OperationInterrupted; this covers the gaps between them
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received, leaving menu");
            should_exit.store(true, Ordering::SeqCst);
        })?;
    }

    let mut request = HashRequest {
        algorithm: config.default_algorithm,
        alphanumeric_count: config.default_alnum_count,
        symbol_count: config.default_symbol_count,
    };
    let mut last_password: Option<String> = None;

    while !should_exit.load(Ordering::SeqCst) {
        println!(
            "\nCurrent settings: {}, {} alphanumeric, {} symbols",
            request.algorithm, request.alphanumeric_count, request.symbol_count
        );

        let options = vec![GENERATE, CHANGE_ALGORITHM, CHANGE_COUNTS, EXIT];
        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()
        {
            Ok(Some(selection)) => selection,
            Ok(None) => break,
            Err(e) if is_interrupt(&e) => break,
            Err(e) => return Err(e.into()),
        };
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection {
            GENERATE => match core::run(&request) {
                Ok(report) => {
                    println!("\n{}", format_report(&report));
                    last_password = Some(report.password);
                }
                Err(e) => {
                    log::warn!("generation failed: {}", e);
                    println!("❌ {}", e);
                }
            },
            CHANGE_ALGORITHM => {
                if let Some(algorithm) = pick_algorithm(request.algorithm)? {
                    request.algorithm = algorithm;
                }
            }
            CHANGE_COUNTS => {
                let alnum = pick_count(
                    "Alphanumeric characters:",
                    &config.alnum_choices,
                    "Characters",
                    request.alphanumeric_count,
                )?;
                let symbols = pick_count(
                    "Symbols:",
                    &config.symbol_choices,
                    "Symbols",
                    request.symbol_count,
                )?;
                if let Some(count) = alnum {
                    request.alphanumeric_count = count;
                }
                if let Some(count) = symbols {
                    request.symbol_count = count;
                }

                // The last password is kept; only its estimate follows the new counts
                if let Some(password) = &last_password {
                    let estimate = core::reestimate(password, request.alphanumeric_count, request.symbol_count);
                    println!("{}", format_estimate(&estimate));
                }
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
