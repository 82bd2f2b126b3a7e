use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::{signal, sync::Notify};
use tracing::info;

/// Cooperative shutdown flag shared between the signal listener and the
/// HTTP server's graceful-shutdown future.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal {
    triggered: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        if self.is_triggered() {
            return;
        }
        self.notify.notified().await;
    }
}

/// Trip the shutdown flag on ctrl-c or SIGTERM.
pub fn listen_for_signals(shutdown: &ShutdownSignal) {
    let shutdown = shutdown.clone();
    tokio::spawn(async move {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler");
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("Ctrl-C received, initiating graceful shutdown...");
            }
            _ = terminate.recv() => {
                info!("Terminate signal received, initiating graceful shutdown...");
            }
        }
        shutdown.trigger();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_returns_after_trigger() {
        let shutdown = ShutdownSignal::new();
        assert!(!shutdown.is_triggered());

        shutdown.trigger();

        assert!(shutdown.is_triggered());
        // Must not hang once the flag is set
        shutdown.wait().await;
    }
}
