mod args;
mod global;
mod handlers;

use base62_id::{Config, LogLevel};
use clap::{Parser, Subcommand};

use args::{ConfigArgs, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base62")]
#[command(version)]
#[command(about = "Convert 64-bit unsigned integers to and from short base62 identifiers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode decimal integers as base62 identifiers
    Encode(EncodeArgs),
    /// Decode base62 identifiers to decimal integers
    Decode(DecodeArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config warnings need a subscriber before the configured level is known
    let bootstrap = subscriber(cli.global.bootstrap_level());
    let config = tracing::subscriber::with_default(bootstrap, Config::load_with_overrides)?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.global.log_level(&config.settings)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    for source in &config.sources {
        tracing::info!(path = %source.display(), "loaded config");
    }

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Config(args) => handlers::config::handle(args, &cli.global, &config),
    }
}

fn subscriber(level: LogLevel) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}
