use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;

const DEFAULT_HTTP_BIND: &str = "0.0.0.0:8080";

/// Resolved runtime configuration. The service deliberately has a single
/// knob: the address the HTTP listener binds to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_bind_address: SocketAddr,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs { http_bind } = args;

        let http_bind_address = http_bind.unwrap_or_else(|| {
            DEFAULT_HTTP_BIND
                .parse()
                .expect("default bind address valid")
        });

        Ok(Self { http_bind_address })
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "receipt-points", about = "Receipt reward points service", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "RECEIPT_POINTS_HTTP_BIND",
        value_name = "ADDR",
        help = "Address the HTTP listener binds to"
    )]
    pub http_bind: Option<SocketAddr>,
}
