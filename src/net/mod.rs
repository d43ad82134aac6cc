//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     probe.rs resolves the outbound-facing local IP (operator visibility)
//!     listener.rs binds 0.0.0.0:<port>
//!
//! Per iteration:
//!     listener.rs waits for a connection, bounded by the idle timeout
//!     → Connected / Failed / IdleTimeout handed to the server loop
//! ```
//!
//! # Design Decisions
//! - The idle-timeout wait covers only the listening socket; reads on an
//!   accepted connection are unbounded
//! - Accept failures are reported as a distinct outcome so the caller can
//!   keep waiting without treating them as fatal

pub mod listener;
pub mod probe;
