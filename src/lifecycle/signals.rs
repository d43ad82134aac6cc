//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGTERM, SIGQUIT and Ctrl-C
//! - Exit the process immediately with a success status on any of them
//!
//! # Design Decisions
//! - No draining: a transfer interrupted by a signal leaves its partial
//!   file on disk

/// Spawn the watcher task that turns termination signals into an immediate,
/// successful process exit.
pub fn spawn_signal_watcher() {
    tokio::spawn(async {
        wait_for_termination().await;
        tracing::info!("Termination signal received, shutting down");
        std::process::exit(0);
    });
}

#[cfg(unix)]
async fn wait_for_termination() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Unable to register SIGTERM handler");
            return;
        }
    };
    let mut quit = match signal(SignalKind::quit()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Unable to register SIGQUIT handler");
            return;
        }
    };

    tokio::select! {
        _ = terminate.recv() => {}
        _ = quit.recv() => {}
        _ = tokio::signal::ctrl_c() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Unable to register Ctrl-C handler");
    }
}
