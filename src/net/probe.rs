//! Outbound-facing local IP discovery.
//!
//! Connecting a UDP socket to a well-known public address forces the OS to
//! select a local source address without sending any packets. The resolved
//! address is reported at startup for operator visibility.

use std::net::IpAddr;

use tokio::net::UdpSocket;

use crate::config::PROBE_ADDR;
use crate::error::ServerError;

/// Resolve the local IP the OS would use for outbound traffic.
pub async fn local_ip() -> Result<IpAddr, ServerError> {
    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .map_err(ServerError::Probe)?;
    socket.connect(PROBE_ADDR).await.map_err(ServerError::Probe)?;
    let local_addr = socket.local_addr().map_err(ServerError::Probe)?;
    Ok(local_addr.ip())
}
