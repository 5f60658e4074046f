//! NotRedis CLI Client
//!
//! Command-line interface for interacting with a NotRedis server.

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;
use std::process::ExitCode;

use clap::Parser;
use notredis::config::DEFAULT_ADDRESS;
use notredis::Result;

/// NotRedis CLI
#[derive(Parser, Debug)]
#[command(name = "notredis-cli")]
#[command(about = "CLI for the NotRedis key-value store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Run a single command (e.g. `GET color`) instead of prompting
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let stream = TcpStream::connect(&args.address)?;
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;

    if !args.command.is_empty() {
        let response = round_trip(&mut writer, &mut reader, &args.command.join(" "))?;
        println!("{}", response);
        return Ok(());
    }

    println!("Enter commands (SET key value, GET key, DEL key, or 'exit' to quit):");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end();
        if line == "exit" {
            return Ok(());
        }

        let response = round_trip(&mut writer, &mut reader, line)?;
        println!("{}", response);
    }
}

/// Send one request line and wait for its response line
fn round_trip(
    writer: &mut TcpStream,
    reader: &mut BufReader<TcpStream>,
    request: &str,
) -> Result<String> {
    writer.write_all(request.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    let mut response = String::new();
    if reader.read_line(&mut response)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "server closed the connection").into());
    }
    Ok(response.trim_end_matches(['\r', '\n']).to_string())
}
