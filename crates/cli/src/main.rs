use clap::{Parser, Subcommand};

mod commands;

use commands::{GenerateArgs, PayoutArgs};

#[derive(Parser)]
#[command(name = "royalty-gen")]
#[command(about = "Synthetic audiobook royalty fixture generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of royalty records and write it to a file
    Generate(GenerateArgs),
    /// Compute the AYCL per-book payout share
    Payout(PayoutArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => commands::run_generate(args)?,
        Commands::Payout(args) => commands::run_payout(args)?,
    }

    Ok(())
}
