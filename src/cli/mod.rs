use crate::game::consts::DEFAULT_SHARE_LINK;
use crate::storage::sessions::DEFAULT_SESSION_TTL;
use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Base URL of the service answering `/api/get-location` and `/api/check-distance`.
    #[arg(long)]
    #[arg(default_value = "http://localhost:5000")]
    pub api_url: Url,
    #[arg(long)]
    #[arg(default_value_t = 5000)]
    pub api_timeout_ms: u64,
    /// May be given several times.
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// Sessions untouched for this long are dropped.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_SESSION_TTL.as_secs())]
    pub session_ttl_secs: u64,
    #[arg(long)]
    #[arg(default_value = DEFAULT_SHARE_LINK)]
    pub share_link: String,
    #[arg(long)]
    #[arg(default_value = "beantown_browser=info")]
    pub log_directive: String,
}
