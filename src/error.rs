//! Fatal error taxonomy for the receiving service.
//!
//! Every variant here terminates the process with a failure status when it
//! reaches `main`. The one recoverable condition, a failed `accept` call, is
//! logged and skipped inside the accept loop and never becomes a
//! `ServerError`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole service.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The UDP probe used to resolve the outbound-facing local IP failed.
    #[error("unable to resolve local address via UDP probe: {0}")]
    Probe(#[source] std::io::Error),

    /// Creating or binding the listening socket failed.
    #[error("unable to bind listening socket: {0}")]
    Bind(#[source] std::io::Error),

    /// The configured target directory does not exist or is not a directory.
    #[error("target directory {} does not exist or is not a directory", .0.display())]
    TargetDir(PathBuf),

    /// Creating the numbered output file failed.
    #[error("unable to create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read on the active connection failed.
    #[error("unable to receive data from the client: {0}")]
    Receive(#[source] std::io::Error),

    /// Appending a received chunk to the output file failed.
    #[error("unable to write to output file: {0}")]
    Write(#[source] std::io::Error),

    /// Sending an acknowledgement to the client failed.
    #[error("unable to send acknowledgement: {0}")]
    Ack(#[source] std::io::Error),

    /// The cumulative payload exceeded the configured size cap.
    #[error("received {received} bytes, exceeding the maximum allowed size of {limit} bytes")]
    FileTooLarge { received: u64, limit: u64 },
}
