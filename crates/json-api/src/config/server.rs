//! Listener Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Address the API listens on.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind
    #[arg(
        short = 'H',
        long,
        env = "SERVER_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    /// Storefront clients expect port 5000 unless told otherwise
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
