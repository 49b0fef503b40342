//! AgriChain CLI - serves the farmer submission endpoint and submits to it.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "agri-cli",
    version,
    about = "AgriChain farmer submission backend"
)]
struct Cli {
    #[command(subcommand)]
    command: agri_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    agri_cmd::run(cli.command).await
}
