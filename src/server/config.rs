use std::net::SocketAddr;

use crate::client::DEFAULT_BASE;
use clap::Parser;
use log::LevelFilter;

/// Command line and environment configuration of the example server.
#[derive(Parser, Debug, Clone)]
#[command(name = "fourchan-server", version, about = "Browse boards, catalogs and threads as plain HTML")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "FOURCHAN_LISTEN", default_value = "127.0.0.1:44444")]
    pub listen: SocketAddr,

    /// Root of the upstream API.
    #[arg(long, env = "FOURCHAN_API_BASE", default_value = DEFAULT_BASE)]
    pub api_base: String,

    /// Upper bound for each upstream request, in seconds. Unbounded if unset.
    #[arg(long, env = "FOURCHAN_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Maximum log level.
    #[arg(long, env = "FOURCHAN_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}
