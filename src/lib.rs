//! filedrop — a minimal TCP file-receiving service.
//!
//! # Architecture Overview
//!
//! ```text
//! bind → loop { wait (idle timeout) → accept → ack → stream-to-file → ack } → exit
//!
//!     Client connection         ┌──────────────────────────────────────┐
//!     ──────────────────────────┼─▶ net/listener ──▶ server (receive   │
//!                               │       │            loop, size cap,   │
//!     "ACK ..." responses       │       │            acknowledgements) │
//!     ◀─────────────────────────┼───────┘                 │            │
//!                               │                         ▼            │
//!                               │                  <dir>/<N>.file      │
//!                               │                                      │
//!                               │  Cross-cutting: config, lifecycle    │
//!                               │  (signals), net/probe (local IP)     │
//!                               └──────────────────────────────────────┘
//! ```
//!
//! Connections are strictly serialized: the listening socket is not polled
//! again until the active transfer completes. The service exits on its own
//! after the idle timeout elapses with no pending connection, or immediately
//! on a termination signal.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod net;
pub mod server;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::FileReceiver;
