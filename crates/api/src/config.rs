//! Server configuration from the environment

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

const HOST_VAR: &str = "ROSTER_HOST";
const PORT_VAR: &str = "ROSTER_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// Raised when an environment variable holds an unusable value.
///
/// An unset variable is not an error — defaults apply.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `ROSTER_HOST` is set but not a valid IP address.
    #[error("ROSTER_HOST is not a valid IP address")]
    Host(#[source] AddrParseError),

    /// `ROSTER_PORT` is set but not a valid port number.
    #[error("ROSTER_PORT is not a valid port")]
    Port(#[source] ParseIntError),
}

/// Listen address configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind (default `0.0.0.0`).
    pub host: IpAddr,
    /// Port to bind (default `3000`).
    pub port: u16,
}

impl ApiConfig {
    /// Reads the configuration from `ROSTER_HOST` / `ROSTER_PORT`,
    /// falling back to the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an unparsable
    /// value — bad configuration fails startup rather than being silently
    /// replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var(HOST_VAR) {
            Ok(raw) => raw.parse().map_err(ConfigError::Host)?,
            Err(_) => DEFAULT_HOST,
        };

        let port = match std::env::var(PORT_VAR) {
            Ok(raw) => raw.parse().map_err(ConfigError::Port)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// The socket address to bind.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}
