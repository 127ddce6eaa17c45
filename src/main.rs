use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tiny_encoder::utils::io::{read_json, read_json_file, write_json};
use tiny_encoder::{EncoderRequest, ExecutionMode, run};

/// Runs an unnormalized self-attention encoder layer over JSON input.
#[derive(Parser)]
#[command(name = "tiny-encoder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read an encoder request (file or stdin) and print the response.
    Run(RunArgs),

    /// Print a request with a deterministic input matrix.
    Sample(SampleArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Request file; stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pretty: bool,

    /// Print the plain-text summary instead of JSON.
    #[arg(long, conflicts_with = "pretty")]
    text: bool,

    /// Force parallel row execution regardless of the request.
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct SampleArgs {
    #[arg(long, default_value_t = 4)]
    d_model: usize,

    #[arg(long, default_value_t = 3)]
    seq_len: usize,

    #[arg(long, default_value_t = 1)]
    heads: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_request(args),
        Command::Sample(args) => print_sample(args),
    }
}

fn run_request(args: RunArgs) -> Result<()> {
    let mut request: EncoderRequest = match &args.input {
        Some(path) => read_json_file(path)
            .with_context(|| format!("failed to read request from {}", path.display()))?,
        None => read_json(io::stdin().lock()).context("failed to read request from stdin")?,
    };
    if args.parallel {
        request = request.with_execution(ExecutionMode::Parallel);
    }

    log::info!(
        "running encoder layer: d_model={} heads={} rows={}",
        request.dimensionalidad,
        request.attention_heads,
        request.matrix.len()
    );
    let response = run(&request)?;

    if args.text {
        println!("{}", response.summary());
    } else {
        write_json(io::stdout().lock(), &response, args.pretty)?;
    }
    Ok(())
}

fn print_sample(args: SampleArgs) -> Result<()> {
    let request = EncoderRequest::sample(args.d_model, args.seq_len, args.heads);
    write_json(io::stdout().lock(), &request, true)?;
    Ok(())
}
