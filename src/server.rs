//! The connection server: a strictly serialized accept/receive loop.
//!
//! # Data Flow
//! ```text
//! WAITING ──(connection ready)──▶ ACCEPTED ──▶ RECEIVING ──▶ ACKED_DONE
//!    ▲                                                            │
//!    │◀───────────────────────────────────────────────────────────┘
//!    └──(idle timeout)──▶ SHUTDOWN (exit 0)
//! ```
//!
//! # Design Decisions
//! - One connection at a time: the listener is not polled again until the
//!   active transfer has completed and been acknowledged
//! - A receive error or an oversized payload aborts the whole service, not
//!   just the connection
//! - The connection counter increments only for accepted connections, so
//!   ordinals stay gap-free across a run

use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::{Limits, ServerConfig};
use crate::error::ServerError;
use crate::net::listener::{AcceptOutcome, Listener};

/// Sent to the client right after its connection is accepted.
const ACK_CONNECTED: &[u8] = b"ACK Connection established";

/// Sent to the client once its payload has been written to disk.
const ACK_RECEIVED: &[u8] = b"ACK File received successfully";

/// Receives one file per connection into a numbered file on disk.
pub struct FileReceiver {
    listener: Listener,
    file_dir: PathBuf,
    limits: Limits,
    /// Ordinal of the most recently accepted connection; 0 before the first.
    connection_id: u64,
}

impl FileReceiver {
    /// Validate the config and bind the listening socket.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;
        let listener = Listener::bind(&config).await?;
        Ok(Self {
            listener,
            file_dir: config.file_dir,
            limits: config.limits,
            connection_id: 0,
        })
    }

    /// Get the local address the server is listening on.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    /// Run the accept loop until the idle timeout elapses or a fatal error
    /// occurs.
    ///
    /// Returns `Ok(())` on idle-timeout shutdown. Accept failures are logged
    /// and skipped; every other failure tears the service down.
    pub async fn run(mut self) -> Result<(), ServerError> {
        loop {
            match self.listener.accept_idle().await {
                AcceptOutcome::IdleTimeout => {
                    tracing::info!(
                        idle_secs = self.limits.idle_timeout.as_secs(),
                        "No connection within the idle window, shutting down"
                    );
                    return Ok(());
                }
                AcceptOutcome::Failed(e) => {
                    tracing::warn!(error = %e, "Unable to accept connection");
                }
                AcceptOutcome::Connected(stream, peer_addr) => {
                    self.connection_id += 1;
                    tracing::info!(
                        connection = self.connection_id,
                        peer_addr = %peer_addr,
                        "Connection accepted"
                    );
                    self.handle_connection(stream).await?;
                }
            }
        }
    }

    /// Serve one accepted connection: ack, stream the payload to its
    /// numbered file, ack again, close.
    async fn handle_connection(&mut self, mut stream: TcpStream) -> Result<(), ServerError> {
        stream
            .write_all(ACK_CONNECTED)
            .await
            .map_err(ServerError::Ack)?;

        let path = self.file_dir.join(format!("{}.file", self.connection_id));
        let file = File::create(&path).await.map_err(|source| ServerError::Create {
            path: path.clone(),
            source,
        })?;

        let received = self.receive_payload(&mut stream, file).await?;

        tracing::info!(
            connection = self.connection_id,
            path = %path.display(),
            bytes = received,
            "File received"
        );

        stream
            .write_all(ACK_RECEIVED)
            .await
            .map_err(ServerError::Ack)?;
        let _ = stream.shutdown().await;
        Ok(())
    }

    /// Stream the connection's bytes into `file` until the peer signals EOF.
    ///
    /// Enforces the size cap after each chunk, so an oversized stream aborts
    /// as soon as the cap is crossed. Returns the number of bytes written.
    async fn receive_payload(
        &self,
        stream: &mut TcpStream,
        mut file: File,
    ) -> Result<u64, ServerError> {
        let mut buffer = vec![0u8; self.limits.buffer_size];
        let mut received: u64 = 0;

        loop {
            let n = stream.read(&mut buffer).await.map_err(ServerError::Receive)?;
            if n == 0 {
                break;
            }

            file.write_all(&buffer[..n])
                .await
                .map_err(ServerError::Write)?;
            received += n as u64;

            if received > self.limits.max_file_size {
                return Err(ServerError::FileTooLarge {
                    received,
                    limit: self.limits.max_file_size,
                });
            }
        }

        file.flush().await.map_err(ServerError::Write)?;
        Ok(received)
    }
}
