//! TCP listener with an idle-timeout bounded accept.
//!
//! # Responsibilities
//! - Bind to the configured wildcard address
//! - Wait for at most one pending connection at a time
//! - Surface the idle timeout as a distinct outcome, not an error

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Outcome of one bounded wait on the listening socket.
#[derive(Debug)]
pub enum AcceptOutcome {
    /// A client connected within the idle window.
    Connected(TcpStream, SocketAddr),
    /// The accept call itself failed; the caller may keep waiting.
    Failed(std::io::Error),
    /// No client arrived before the idle timeout elapsed.
    IdleTimeout,
}

/// The listening socket plus its idle-timeout policy.
pub struct Listener {
    inner: TcpListener,
    idle_timeout: Duration,
}

impl Listener {
    /// Bind to `0.0.0.0:<port>` from the given config.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.bind_address())
            .await
            .map_err(ServerError::Bind)?;

        let local_addr = listener.local_addr().map_err(ServerError::Bind)?;

        tracing::info!(
            address = %local_addr,
            idle_timeout_secs = config.limits.idle_timeout.as_secs(),
            "Listener bound"
        );

        Ok(Self {
            inner: listener,
            idle_timeout: config.limits.idle_timeout,
        })
    }

    /// Wait for the next connection, bounded by the idle timeout.
    ///
    /// The timer restarts on every call, so the bound applies per wait, not
    /// to the whole session.
    pub async fn accept_idle(&self) -> AcceptOutcome {
        match timeout(self.idle_timeout, self.inner.accept()).await {
            Ok(Ok((stream, addr))) => AcceptOutcome::Connected(stream, addr),
            Ok(Err(e)) => AcceptOutcome::Failed(e),
            Err(_) => AcceptOutcome::IdleTimeout,
        }
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }
}
