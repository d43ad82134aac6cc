//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGQUIT/Ctrl-C → log → immediate exit with success status
//!
//! Idle timeout:
//!     handled inside the accept loop, returns through main (exit 0)
//! ```
//!
//! # Design Decisions
//! - Termination signals exit immediately; an in-flight transfer is not
//!   drained and its partial file remains on disk
//! - Both shutdown paths report success to the caller

pub mod signals;
