//! Listener settings.
//!
//! The tool is zero-configuration: the binary always runs with
//! [`DumpConfig::default`]. The struct exists so the library (and its tests)
//! can bind somewhere other than the fixed port.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the dump server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// All interfaces, fixed port.
pub const DEFAULT_BIND_ADDRESS: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT);

/// Root configuration for the dump server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpConfig {
    /// Address the listening socket is bound to.
    pub bind_address: SocketAddr,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_all_interfaces_port_8000() {
        let config = DumpConfig::default();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8000");
        assert!(config.bind_address.ip().is_unspecified());
    }
}
