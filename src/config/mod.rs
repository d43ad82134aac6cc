//! Configuration for the receiving service.
//!
//! # Design Decisions
//! - Config is immutable once the server starts; there is no reload path
//! - The port is a `NonZeroU16` so an invalid port cannot be represented
//! - Operational limits are named constants surfaced as a struct, so tests
//!   can substitute small synthetic values

use std::net::{Ipv4Addr, SocketAddr};
use std::num::NonZeroU16;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ServerError;

/// Address the UDP probe connects to when resolving the outbound-facing
/// local IP. No packets are ever sent to it.
pub const PROBE_ADDR: &str = "8.8.8.8:53";

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_BUFFER_SIZE: usize = 1024;
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Operational limits for the receive loop.
#[derive(Debug, Clone)]
pub struct Limits {
    /// How long the server waits for a new connection before shutting down.
    /// The timer restarts every time the server returns to the waiting state.
    pub idle_timeout: Duration,

    /// Size of the fixed read buffer used while streaming a payload to disk.
    pub buffer_size: usize,

    /// Maximum cumulative payload size per connection, in bytes.
    pub max_file_size: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Immutable server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: NonZeroU16,

    /// Directory numbered output files are written into.
    pub file_dir: PathBuf,

    /// Operational limits (idle timeout, buffer size, size cap).
    pub limits: Limits,
}

impl ServerConfig {
    /// Create a config with default limits.
    pub fn new(port: NonZeroU16, file_dir: PathBuf) -> Self {
        Self {
            port,
            file_dir,
            limits: Limits::default(),
        }
    }

    /// Semantic validation: the target directory must already exist.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.file_dir.is_dir() {
            return Err(ServerError::TargetDir(self.file_dir.clone()));
        }
        Ok(())
    }

    /// Wildcard bind address for the listening socket.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port.get()))
    }
}
