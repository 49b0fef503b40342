//! Command implementations for the AgriChain CLI.
//!
//! Provides subcommands for running the farmer submission endpoint and
//! for posting a saved profile to it.

use clap::Subcommand;
use std::net::IpAddr;
use std::path::PathBuf;

pub mod serve;
pub mod submit;

#[derive(Subcommand)]
pub enum Command {
    /// Run the farmer submission endpoint
    Serve {
        /// TCP port to listen on
        #[arg(short, long, env = "PORT", default_value_t = agri_server::DEFAULT_PORT)]
        port: u16,

        /// Directory receiving one JSON file per submission
        #[arg(short, long, env = "AGRI_DATA_DIR", default_value = ".")]
        data_dir: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: IpAddr,
    },

    /// Submit a farmer profile JSON file to a running endpoint
    Submit {
        /// Path to the JSON payload
        #[arg(short, long)]
        file: PathBuf,

        /// Base URL of the endpoint
        #[arg(short, long, default_value = agri_core::submission::DEFAULT_BASE_URL)]
        url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            port,
            data_dir,
            bind,
        } => serve::run_serve(bind, port, data_dir).await,
        Command::Submit { file, url } => submit::run_submit(&file, &url).await,
    }
}
