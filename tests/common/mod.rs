//! Shared utilities for integration testing the receiving service.

use std::net::SocketAddr;
use std::num::NonZeroU16;
use std::path::PathBuf;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use filedrop::config::{Limits, ServerConfig};
use filedrop::error::ServerError;
use filedrop::server::FileReceiver;

#[allow(dead_code)]
pub const ACK_CONNECTED: &str = "ACK Connection established";
pub const ACK_RECEIVED: &str = "ACK File received successfully";

/// A receiving service running in a background task on a fixed test port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub dir: PathBuf,
    pub handle: JoinHandle<Result<(), ServerError>>,
    _tempdir: TempDir,
}

/// Start a server on `port` with the given limits, writing into a fresh
/// temp directory.
pub async fn start_server(port: u16, limits: Limits) -> TestServer {
    let tempdir = tempfile::tempdir().expect("tempdir");
    let dir = tempdir.path().to_path_buf();

    let mut config = ServerConfig::new(
        NonZeroU16::new(port).expect("nonzero test port"),
        dir.clone(),
    );
    config.limits = limits;

    let server = FileReceiver::new(config).await.expect("server should bind");
    let handle = tokio::spawn(server.run());

    TestServer {
        addr: SocketAddr::from(([127, 0, 0, 1], port)),
        dir,
        handle,
        _tempdir: tempdir,
    }
}

/// Default limits with a short idle timeout so tests finish quickly.
#[allow(dead_code)]
pub fn quick_limits() -> Limits {
    Limits {
        idle_timeout: std::time::Duration::from_millis(500),
        ..Limits::default()
    }
}

/// Run one full client exchange: read the connect ack, stream `payload`,
/// close the write side, read the completion ack.
pub async fn send_payload(addr: SocketAddr, payload: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");

    let mut ack = vec![0u8; ACK_CONNECTED.len()];
    stream.read_exact(&mut ack).await.expect("connect ack");
    assert_eq!(ack, ACK_CONNECTED.as_bytes());

    stream.write_all(payload).await.expect("send payload");
    stream.shutdown().await.expect("shutdown write side");

    let mut rest = Vec::new();
    stream.read_to_end(&mut rest).await.expect("completion ack");
    String::from_utf8(rest).expect("ack is ASCII")
}
