//! NotRedis Server Binary
//!
//! Starts the TCP server for NotRedis.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use notredis::engine::build_engine;
use notredis::network::Server;
use notredis::{logging, Config, Storage};

/// NotRedis Server
#[derive(Parser, Debug)]
#[command(name = "notredis-server")]
#[command(about = "Minimal networked key-value store")]
#[command(version)]
struct Args {
    /// Path to the YAML config file (missing file means defaults)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Listen address (host:port), overrides the config file
    #[arg(short, long)]
    address: Option<String>,

    /// Maximum concurrent connections, overrides the config file
    #[arg(short, long)]
    max_connections: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config {}: {}", args.config.display(), e);
            std::process::exit(1);
        }
    };

    // Initialize tracing/logging
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Error setting up logger: {}", e);
        std::process::exit(1);
    }

    tracing::info!("NotRedis Server v{}", notredis::VERSION);

    let mut server_config = config.server_config();
    if let Some(address) = args.address {
        server_config.address = address;
    }
    if let Some(max_connections) = args.max_connections {
        server_config.max_connections = max_connections;
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
            std::process::exit(1);
        }
    };

    let server = match Server::bind(server_config, storage) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
