// src/cli/handlers.rs
use serde_json::{json, Value};

use crate::cli::{menu, Args, CliCommand};
use crate::core::{self, Config, EngineError};
use crate::crypto;
use crate::estimator::Estimate;
use crate::models::{DigestAlgorithm, DigestResult, HashReport, HashRequest};

pub fn format_report(report: &HashReport) -> String {
    format!(
        "Password: {}\nHash ({}): {}\nEstimated time to crack: {}\nHashing duration: {:.2} ms",
        report.password,
        report.algorithm,
        report.digest_hex,
        report.crack_estimate,
        report.digest_duration_millis
    )
}

pub fn format_estimate(estimate: &Estimate) -> String {
    match estimate {
        Estimate::Inferred(_) => format!("Estimated time to crack: {} (pool inferred from content)", estimate),
        _ => format!("Estimated time to crack: {}", estimate),
    }
}

pub fn format_digest(result: &DigestResult) -> String {
    format!(
        "Hash ({}): {}\nHashing duration: {:.2} ms",
        result.algorithm, result.hex_digest, result.duration_millis
    )
}

pub fn report_json(report: &HashReport) -> Value {
    json!({
        "success": true,
        "report": report,
    })
}

pub fn estimate_json(estimate: &Estimate) -> Value {
    json!({
        "success": true,
        "crack_estimate": estimate.label(),
        "confidence": estimate.confidence(),
        "estimate": estimate,
    })
}

pub fn digest_json(result: &DigestResult) -> Value {
    json!({
        "success": true,
        "digest": result,
    })
}

/// JSON body for a failed command; engine errors carry their kind.
pub fn error_json(err: &anyhow::Error) -> Value {
    let kind = err.downcast_ref::<EngineError>().map(|e| e.kind().to_string());
    json!({
        "success": false,
        "error": err.to_string(),
        "kind": kind,
    })
}

pub fn handle_generate(request: &HashRequest) -> Result<HashReport, EngineError> {
    core::run(request)
}

pub fn handle_estimate(password: &str, request: &HashRequest) -> Estimate {
    core::reestimate(password, request.alphanumeric_count, request.symbol_count)
}

pub fn handle_digest(algorithm: DigestAlgorithm, password: &str) -> Result<DigestResult, EngineError> {
    Ok(crypto::digest(algorithm, password)?)
}

/// Execute the parsed command and print its output to stdout.
pub fn run_command(args: Args, config: &Config) -> anyhow::Result<()> {
    let request = args.request(config);
    log::debug!("resolved request: {:?}", request);

    match args.command.unwrap_or(CliCommand::Generate) {
        CliCommand::Generate => {
            let report = handle_generate(&request)?;
            if args.json {
                println!("{}", report_json(&report));
            } else {
                println!("{}", format_report(&report));
            }
        }
        CliCommand::Estimate { password } => {
            let estimate = handle_estimate(&password, &request);
            if args.json {
                println!("{}", estimate_json(&estimate));
            } else {
                println!("{}", format_estimate(&estimate));
            }
        }
        CliCommand::Digest { password } => {
            let result = handle_digest(request.algorithm, &password)?;
            if args.json {
                println!("{}", digest_json(&result));
            } else {
                println!("{}", format_digest(&result));
            }
        }
        CliCommand::Interactive => menu::run_cli_menu(config)?,
    }

    Ok(())
}
