use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use rust_passhash::cli::{handlers, Args};
use rust_passhash::core::Config;
use rust_passhash::logging;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_errors) = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️ Logging disabled: {}", e);
    }
    for e in &config_errors {
        log::warn!("{}", e);
    }
    log::debug!("command line args: {:?}", args);
    log::debug!("loaded config: {:?}", config);

    let json = args.json;
    match handlers::run_command(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            if json {
                println!("{}", handlers::error_json(&e));
            } else {
                eprintln!("❌ {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
