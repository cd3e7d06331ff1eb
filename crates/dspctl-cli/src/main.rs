//! dspctl CLI - inspect endpoint tables, encode DSP payloads, resolve key vectors.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dspctl")]
#[command(author, version, about = "DSP control-payload compiler", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a hardware endpoint XML file and list its entries
    Endpoints(commands::endpoints::EndpointsArgs),

    /// Encode one parameter payload
    Payload(commands::payload::PayloadArgs),

    /// Resolve the key vectors of a session description
    Keys(commands::keys::KeysArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Endpoints(args) => commands::endpoints::run(args, cli.json),
        Commands::Payload(args) => commands::payload::run(args, cli.json),
        Commands::Keys(args) => commands::keys::run(args, cli.json),
    }
}
