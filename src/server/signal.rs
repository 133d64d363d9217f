// Signal handling module
//
// - SIGTERM: shutdown
// - SIGINT:  shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Spawn a task that notifies `shutdown` once a termination signal arrives
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        shutdown.notify_one();
    });
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = sigterm.recv() => logger::log_signal("SIGTERM"),
                () = wait_for_ctrl_c() => {}
            }
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to register SIGTERM handler: {e}"));
            wait_for_ctrl_c().await;
        }
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    wait_for_ctrl_c().await;
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed
async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logger::log_signal("SIGINT"),
        Err(e) => {
            logger::log_warning(&format!("Failed to register Ctrl+C handler: {e}"));
            std::future::pending::<()>().await;
        }
    }
}
