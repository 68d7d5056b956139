//! Monitor lifecycle: the polling loop and its subscription surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use glance_core::windows::provider::WindowProvider;

use crate::monitor::diff::DiffEngine;
use crate::monitor::types::{MonitorConfig, WindowEvent};

struct RunningState {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Polling-based window lifecycle monitor.
///
/// One long-lived instance owns the retained snapshot and the polling task.
/// Consumers only ever observe emitted events through [`subscribe`]; the
/// snapshot itself never leaves the loop.
///
/// Ticks cannot overlap: the single loop task performs the whole
/// obtain-parse-diff-emit sequence before sleeping again, so a slow
/// provider delays the next tick rather than racing it.
///
/// [`subscribe`]: WindowMonitor::subscribe
pub struct WindowMonitor {
    provider: Arc<dyn WindowProvider>,
    events_tx: broadcast::Sender<WindowEvent>,
    poll_interval_ms: Arc<AtomicU64>,
    state: Mutex<Option<RunningState>>,
}

impl WindowMonitor {
    pub fn new(provider: Arc<dyn WindowProvider>, config: MonitorConfig) -> Self {
        let (events_tx, _) = broadcast::channel(config.broadcast_capacity);
        Self {
            provider,
            events_tx,
            poll_interval_ms: Arc::new(AtomicU64::new(config.poll_interval_ms.max(1))),
            state: Mutex::new(None),
        }
    }

    /// Subscribe to lifecycle events. Dropping the receiver unsubscribes.
    ///
    /// Subscription works in any state; a receiver obtained while stopped
    /// starts seeing events once the monitor starts.
    pub fn subscribe(&self) -> broadcast::Receiver<WindowEvent> {
        self.events_tx.subscribe()
    }

    /// Number of currently subscribed receivers.
    pub fn subscriber_count(&self) -> usize {
        self.events_tx.receiver_count()
    }

    /// Current polling interval in milliseconds.
    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms.load(Ordering::Relaxed)
    }

    /// Replace the polling interval.
    ///
    /// Takes effect at the next tick boundary; the retained snapshot is
    /// untouched. A zero interval is clamped to 1ms.
    pub fn set_poll_interval(&self, ms: u64) {
        let clamped = ms.max(1);
        self.poll_interval_ms.store(clamped, Ordering::Relaxed);
        info!(event = "monitor.poll_interval_changed", poll_interval_ms = clamped);
    }

    /// Whether the polling loop is currently running.
    pub async fn is_running(&self) -> bool {
        self.state.lock().await.is_some()
    }

    /// Capture the baseline snapshot and begin periodic ticking.
    ///
    /// Idempotent: starting a running monitor is a no-op and leaves the
    /// retained snapshot and baseline untouched.
    pub async fn start(&self) {
        let mut state = self.state.lock().await;
        if state.is_some() {
            debug!(event = "monitor.start_ignored_already_running");
            return;
        }

        let mut engine = DiffEngine::new();
        engine.capture_baseline(self.provider.as_ref());

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let provider = Arc::clone(&self.provider);
        let events_tx = self.events_tx.clone();
        let poll_interval_ms = Arc::clone(&self.poll_interval_ms);

        let handle = tokio::spawn(async move {
            loop {
                let interval = poll_interval_ms.load(Ordering::Relaxed);
                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        // Err means the sender is gone, which also ends the loop.
                        let _ = changed;
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(interval)) => {
                        let events = engine.tick(provider.as_ref());
                        for event in events {
                            // send fails only when no receivers exist, which
                            // is normal between subscriptions.
                            if events_tx.send(event).is_err() {
                                debug!(event = "monitor.broadcast_no_receivers");
                            }
                        }
                    }
                }
            }
            debug!(event = "monitor.loop_exited");
        });

        *state = Some(RunningState {
            shutdown_tx,
            handle,
        });
        info!(
            event = "monitor.started",
            poll_interval_ms = self.poll_interval_ms.load(Ordering::Relaxed),
        );
    }

    /// Stop the polling loop.
    ///
    /// Idempotent. Waits for the loop task to exit, so no events are
    /// emitted after this returns; a tick already diffing when stop is
    /// called completes and emits first.
    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        let Some(running) = state.take() else {
            debug!(event = "monitor.stop_ignored_not_running");
            return;
        };

        let _ = running.shutdown_tx.send(true);
        if let Err(e) = running.handle.await {
            error!(event = "monitor.loop_join_failed", error = %e);
        }
        info!(event = "monitor.stopped");
    }
}
