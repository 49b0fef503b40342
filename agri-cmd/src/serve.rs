//! Run the farmer submission endpoint.

use agri_server::ServerConfig;
use log::info;
use std::net::IpAddr;
use std::path::PathBuf;

/// Serve `POST /api/farmer`, storing records under `data_dir`.
///
/// The directory is created if missing. Records accumulate without limit;
/// nothing here prunes them.
pub async fn run_serve(bind: IpAddr, port: u16, data_dir: PathBuf) -> anyhow::Result<()> {
    info!("Starting submission endpoint on {}:{}", bind, port);
    agri_server::serve(ServerConfig {
        bind,
        port,
        data_dir,
    })
    .await
}
