//! Integration tests driving the diff engine and monitor with a scriptable
//! fake provider. No real enumeration tool is involved.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use glance_core::windows::errors::ProviderError;
use glance_core::windows::provider::WindowProvider;
use glance_core::{WindowBounds, WindowRecord};
use glance_monitor::{DiffEngine, MonitorConfig, WindowEvent, WindowEventKind, WindowMonitor};

/// Provider whose raw output and focused window can be rescripted between
/// ticks.
struct ScriptedProvider {
    raw: Mutex<String>,
    focused: Mutex<Option<WindowRecord>>,
    enumerate_fails: AtomicBool,
}

impl ScriptedProvider {
    fn new(raw: &str) -> Self {
        Self {
            raw: Mutex::new(raw.to_string()),
            focused: Mutex::new(None),
            enumerate_fails: AtomicBool::new(false),
        }
    }

    fn set_raw(&self, raw: &str) {
        *self.raw.lock().unwrap() = raw.to_string();
    }

    fn set_focused(&self, window: Option<WindowRecord>) {
        *self.focused.lock().unwrap() = window;
    }

    fn set_enumerate_fails(&self, fails: bool) {
        self.enumerate_fails.store(fails, Ordering::SeqCst);
    }
}

impl WindowProvider for ScriptedProvider {
    fn enumerate_windows(&self) -> Result<String, ProviderError> {
        if self.enumerate_fails.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable {
                message: "scripted failure".to_string(),
            });
        }
        Ok(self.raw.lock().unwrap().clone())
    }

    fn focused_window(&self) -> Result<Option<WindowRecord>, ProviderError> {
        Ok(self.focused.lock().unwrap().clone())
    }
}

const WINDOW_A: &str =
    r#"{procName:"Alpha", procID:100, name:"alpha", position:{0, 0}, size:{100, 100}}"#;
const WINDOW_A_MOVED: &str =
    r#"{procName:"Alpha", procID:100, name:"alpha", position:{50, 0}, size:{100, 100}}"#;
const WINDOW_B: &str =
    r#"{procName:"Beta", procID:200, name:"beta", position:{10, 10}, size:{200, 200}}"#;

fn list(objects: &[&str]) -> String {
    format!("{{{}}}", objects.join(", "))
}

fn kinds(events: &[WindowEvent]) -> Vec<WindowEventKind> {
    events.iter().map(|e| e.kind).collect()
}

#[test]
fn test_created_event_for_new_window() {
    let provider = ScriptedProvider::new(&list(&[WINDOW_A]));
    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);
    assert!(engine.has_baseline());

    provider.set_raw(&list(&[WINDOW_A, WINDOW_B]));
    let events = engine.tick(&provider);
    assert_eq!(kinds(&events), vec![WindowEventKind::Created]);
    assert_eq!(events[0].window.id, "200-0");
    assert_eq!(events[0].window.app_name, "Beta");
}

#[test]
fn test_closed_event_for_vanished_window() {
    let provider = ScriptedProvider::new(&list(&[WINDOW_A, WINDOW_B]));
    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);

    provider.set_raw(&list(&[WINDOW_B]));
    let events = engine.tick(&provider);
    assert_eq!(kinds(&events), vec![WindowEventKind::Closed]);
    assert_eq!(events[0].window.id, "100-0");
    // Closed events carry the last-known record.
    assert_eq!(events[0].window.app_name, "Alpha");
}

#[test]
fn test_moved_event_without_resized() {
    let provider = ScriptedProvider::new(&list(&[WINDOW_A]));
    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);

    provider.set_raw(&list(&[WINDOW_A_MOVED]));
    let events = engine.tick(&provider);
    assert_eq!(kinds(&events), vec![WindowEventKind::Moved]);
    assert_eq!(events[0].window.bounds, WindowBounds::new(50, 0, 100, 100));
}

#[test]
fn test_failed_tick_preserves_previous_snapshot() {
    let provider = ScriptedProvider::new(&list(&[WINDOW_A, WINDOW_B]));
    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);

    // A failed enumeration skips the tick without fabricating closed events.
    provider.set_enumerate_fails(true);
    assert!(engine.tick(&provider).is_empty());

    // The next successful tick diffs against the retained snapshot.
    provider.set_enumerate_fails(false);
    assert!(engine.tick(&provider).is_empty());
}

#[test]
fn test_focused_event_is_level_triggered() {
    let provider = ScriptedProvider::new(&list(&[WINDOW_A]));
    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);

    provider.set_focused(Some(WindowRecord {
        id: "100-0".to_string(),
        title: "alpha".to_string(),
        app_name: "Alpha".to_string(),
        pid: 100,
        bounds: WindowBounds::new(0, 0, 100, 100),
    }));

    // Same focused window fires on every tick, by design.
    for _ in 0..2 {
        let events = engine.tick(&provider);
        assert_eq!(kinds(&events), vec![WindowEventKind::Focused]);
        assert_eq!(events[0].window.id, "100-0");
    }
}

#[test]
fn test_first_successful_tick_becomes_baseline_after_failed_capture() {
    let provider = ScriptedProvider::new(&list(&[WINDOW_A]));
    provider.set_enumerate_fails(true);

    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);
    assert!(!engine.has_baseline());

    provider.set_enumerate_fails(false);
    // Baseline tick emits nothing, even though every window is "new".
    assert!(engine.tick(&provider).is_empty());
    assert!(engine.has_baseline());

    provider.set_raw(&list(&[WINDOW_A, WINDOW_B]));
    let events = engine.tick(&provider);
    assert_eq!(kinds(&events), vec![WindowEventKind::Created]);
}

#[test]
fn test_stable_ids_across_ticks_for_reordered_apps() {
    // B appearing before A must not shift A's synthesized id.
    let provider = ScriptedProvider::new(&list(&[WINDOW_A]));
    let mut engine = DiffEngine::new();
    engine.capture_baseline(&provider);

    provider.set_raw(&list(&[WINDOW_B, WINDOW_A]));
    let events = engine.tick(&provider);
    assert_eq!(kinds(&events), vec![WindowEventKind::Created]);
    assert_eq!(events[0].window.id, "200-0");
}

#[tokio::test]
async fn test_monitor_lifecycle_and_event_delivery() {
    // Sole init_logging call in this binary; monitor events below flow
    // through the installed subscriber.
    glance_core::init_logging(true);

    let provider = Arc::new(ScriptedProvider::new(&list(&[WINDOW_A])));
    let config = MonitorConfig {
        poll_interval_ms: 10,
        ..MonitorConfig::default()
    };
    let monitor = WindowMonitor::new(provider.clone(), config);

    monitor.start().await;
    assert!(monitor.is_running().await);
    // Starting again is a no-op and must not reset the baseline.
    monitor.start().await;

    let mut rx = monitor.subscribe();
    provider.set_raw(&list(&[WINDOW_A, WINDOW_B]));

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed");
    assert_eq!(event.kind, WindowEventKind::Created);
    assert_eq!(event.window.id, "200-0");

    monitor.stop().await;
    assert!(!monitor.is_running().await);
    // Stopping again is a no-op.
    monitor.stop().await;
}

#[tokio::test]
async fn test_set_poll_interval_while_running() {
    let provider = Arc::new(ScriptedProvider::new(&list(&[WINDOW_A])));
    let monitor = WindowMonitor::new(provider.clone(), MonitorConfig::default());

    monitor.start().await;
    monitor.set_poll_interval(10);
    assert_eq!(monitor.poll_interval_ms(), 10);

    // The retained snapshot survives the interval change: the next tick
    // diffs against the original baseline, not a fresh one.
    let mut rx = monitor.subscribe();
    provider.set_raw(&list(&[WINDOW_A_MOVED]));
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed");
    assert_eq!(event.kind, WindowEventKind::Moved);

    monitor.stop().await;
}

#[tokio::test]
async fn test_slow_subscriber_does_not_block_others() {
    let provider = Arc::new(ScriptedProvider::new(&list(&[WINDOW_A])));
    let config = MonitorConfig {
        poll_interval_ms: 10,
        broadcast_capacity: 4,
    };
    let monitor = WindowMonitor::new(provider.clone(), config);

    // This receiver is never drained; it may lag and lose events but must
    // not stall delivery to the active one.
    let _lagging = monitor.subscribe();
    let mut rx = monitor.subscribe();
    assert_eq!(monitor.subscriber_count(), 2);

    monitor.start().await;
    provider.set_raw(&list(&[WINDOW_A, WINDOW_B]));

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed");
    assert_eq!(event.kind, WindowEventKind::Created);

    monitor.stop().await;
}

#[test]
fn test_monitor_config_from_toml_uses_defaults() {
    let config: MonitorConfig = toml::from_str("").unwrap();
    assert_eq!(config.poll_interval_ms, 1000);
    assert_eq!(config.broadcast_capacity, 64);

    let config: MonitorConfig = toml::from_str("poll_interval_ms = 250").unwrap();
    assert_eq!(config.poll_interval_ms, 250);
    assert_eq!(config.broadcast_capacity, 64);
}
