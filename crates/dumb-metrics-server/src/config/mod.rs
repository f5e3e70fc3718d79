//! Listen settings.
//!
//! Nothing is read from disk or the environment: the port and the route are
//! fixed at build time.

use std::net::{Ipv4Addr, SocketAddr};

/// TCP port the listener binds.
pub const LISTEN_PORT: u16 = 8888;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenConfig {
    addr: SocketAddr,
}

impl ListenConfig {
    /// All IPv4 interfaces on [`LISTEN_PORT`].
    pub fn fixed() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT)),
        }
    }

    /// Arbitrary address. Tests bind port 0 with this.
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self { addr }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.addr
    }
}
