//! NotRedis REPL Binary
//!
//! Serves commands from stdin against an in-process store.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use notredis::engine::build_engine;
use notredis::repl::Repl;
use notredis::{logging, Config, Storage};

/// NotRedis REPL
#[derive(Parser, Debug)]
#[command(name = "notredis-repl")]
#[command(about = "Line-mode NotRedis reading commands from stdin")]
struct Args {
    /// Path to the YAML config file (missing file means defaults)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Error setting up logger: {}", e);
        return ExitCode::FAILURE;
    }

    let engine = build_engine(config.engine.kind, config.engine.capacity);
    let storage = match Storage::builder()
        .engine(engine)
        .logger(tracing::info_span!("storage"))
        .build()
    {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!("Failed to create storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("NotRedis is ready (SET key value, GET key, DEL key)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match Repl::new(storage).run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("REPL failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
