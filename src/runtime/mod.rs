use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event;
use serde_json::json;

use crate::app::{AppEvent, AppState, Control, Effects};
use crate::config::AppConfig;
use crate::logging::{FileSink, event_with_fields, json_kv};
use crate::{AnsiRenderer, LogLevel, Logger, Result, RuntimeMetrics, Size};

pub mod driver;
pub mod input;

const RUNTIME_TARGET: &str = "boxflow::runtime";
const APP_TARGET: &str = "boxflow::app";

/// Configuration knobs for the runtime loop.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Optional structured logger used by the runtime.
    pub logger: Option<Logger>,
    /// Metrics accumulator used for periodic snapshots.
    pub metrics: Option<Arc<Mutex<RuntimeMetrics>>>,
    /// Interval between metrics snapshot emissions. Zero disables snapshots.
    pub metrics_interval: Duration,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            metrics_interval: Duration::from_secs(5),
            metrics_target: "boxflow::runtime.metrics".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(RuntimeMetrics::new())));
        }
    }

    /// Disable metrics collection and prevent further snapshots.
    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<RuntimeMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Single-threaded event loop: one event is handled to completion, then the
/// frame is redrawn if anything visible changed.
pub struct FlowRuntime {
    app: AppState,
    renderer: AnsiRenderer,
    config: RuntimeConfig,
    should_exit: bool,
    redraw_requested: bool,
    start_instant: Option<Instant>,
    last_metrics_emit: Option<Instant>,
}

impl FlowRuntime {
    pub fn new(app: AppState, renderer: AnsiRenderer) -> Self {
        Self::with_config(app, renderer, RuntimeConfig::default())
    }

    pub fn with_config(app: AppState, renderer: AnsiRenderer, config: RuntimeConfig) -> Self {
        Self {
            app,
            renderer,
            config,
            should_exit: false,
            redraw_requested: true,
            start_instant: None,
            last_metrics_emit: None,
        }
    }

    /// Build a runtime from application config, opening the log file when
    /// one is configured.
    pub fn from_app_config(app_config: &AppConfig) -> Result<Self> {
        let mut config = RuntimeConfig {
            metrics_interval: app_config.metrics_interval,
            ..RuntimeConfig::default()
        };
        if let Some(path) = app_config.log_path.as_ref() {
            let sink = FileSink::new(path, app_config.log_max_bytes)?;
            config.logger = Some(Logger::new(sink).with_min_level(app_config.log_level));
        }
        let app = AppState::new(app_config.style.clone(), app_config.flow_config());
        Ok(Self::with_config(app, AnsiRenderer::with_default(), config))
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    pub fn app(&self) -> &AppState {
        &self.app
    }

    /// Deliver a viewport size outside the event loop, e.g. the initial
    /// terminal size before the first frame.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        self.dispatch_event(AppEvent::Resize {
            width: size.width,
            height: size.height,
        })
    }

    pub fn run(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.bootstrap(stdout)?;

        while !self.should_exit {
            let has_event = match self.poll_timeout() {
                Some(timeout) => event::poll(timeout)?,
                None => true,
            };

            if has_event {
                let raw = event::read()?;
                if let Some(app_event) = input::translate(&raw) {
                    self.dispatch_event(app_event)?;
                    self.render_if_needed(stdout)?;
                }
            }

            self.maybe_emit_metrics();
        }

        self.finalize();
        Ok(())
    }

    pub fn run_scripted<I>(&mut self, stdout: &mut impl Write, events: I) -> Result<()>
    where
        I: IntoIterator<Item = AppEvent>,
    {
        self.bootstrap(stdout)?;
        for event in events {
            self.dispatch_event(event)?;
            self.render_if_needed(stdout)?;
            if self.should_exit {
                break;
            }
        }
        self.finalize();
        Ok(())
    }

    fn dispatch_event(&mut self, event: AppEvent) -> Result<()> {
        let effects = self.app.handle(event);

        if let AppEvent::Resize { width, height } = event {
            self.renderer.invalidate();
            self.log_runtime_event(
                LogLevel::Info,
                RUNTIME_TARGET,
                "resized",
                [
                    json_kv("width", json!(width)),
                    json_kv("height", json!(height)),
                ],
            );
        }
        self.log_effects(&event, &effects);
        self.record_effects_metrics(&effects);

        if effects.redraw {
            self.redraw_requested = true;
        }
        if effects.control == Control::Exit {
            self.should_exit = true;
            self.log_runtime_event(
                LogLevel::Info,
                RUNTIME_TARGET,
                "exit_requested",
                std::iter::empty(),
            );
        }

        self.maybe_emit_metrics();
        Ok(())
    }

    fn render_if_needed(&mut self, stdout: &mut impl Write) -> Result<()> {
        if !self.redraw_requested {
            return Ok(());
        }
        self.redraw_requested = false;

        let frame = self.app.view();
        let written = self.renderer.render(stdout, &frame)?;
        self.record_render_metric(written);
        self.log_runtime_event(
            if written {
                LogLevel::Debug
            } else {
                LogLevel::Trace
            },
            RUNTIME_TARGET,
            if written {
                "render_completed"
            } else {
                "render_skipped"
            },
            [json_kv("lines", json!(frame.len()))],
        );
        Ok(())
    }

    fn bootstrap(&mut self, stdout: &mut impl Write) -> Result<()> {
        self.should_exit = false;
        self.redraw_requested = true;
        self.ensure_metrics_initialized();
        let now = Instant::now();
        self.start_instant = Some(now);
        self.last_metrics_emit = Some(now);
        self.log_runtime_event(
            LogLevel::Info,
            RUNTIME_TARGET,
            "runtime_started",
            [
                json_kv("boxes", json!(self.app.boxes().len())),
                json_kv("ready", json!(self.app.is_ready())),
            ],
        );
        self.render_if_needed(stdout)
    }

    fn finalize(&mut self) {
        let uptime = self
            .start_instant
            .map(|start| start.elapsed())
            .unwrap_or_default();
        self.emit_metrics_snapshot(uptime);
        self.log_runtime_event(
            LogLevel::Info,
            RUNTIME_TARGET,
            "runtime_stopped",
            [
                json_kv("uptime_ms", json!(uptime.as_millis() as u64)),
                json_kv("boxes", json!(self.app.boxes().len())),
            ],
        );
    }

    /// How long to wait for input before the next metrics snapshot is due.
    /// `None` means block until an event arrives.
    fn poll_timeout(&self) -> Option<Duration> {
        if self.config.metrics.is_none() || self.config.metrics_interval.is_zero() {
            return None;
        }
        let elapsed = self
            .last_metrics_emit
            .map(|last| last.elapsed())
            .unwrap_or_default();
        Some(self.config.metrics_interval.saturating_sub(elapsed))
    }

    fn ensure_metrics_initialized(&mut self) {
        if self.config.metrics.is_none() && !self.config.metrics_interval.is_zero() {
            self.config.enable_metrics();
        }
    }

    fn log_effects(&self, event: &AppEvent, effects: &Effects) {
        self.log_runtime_event(
            LogLevel::Debug,
            RUNTIME_TARGET,
            "event_dispatched",
            [
                json_kv("event", json!(event.name())),
                json_kv("repacks", json!(effects.repacks)),
            ],
        );
        if effects.created > 0 {
            self.log_runtime_event(
                LogLevel::Info,
                APP_TARGET,
                "box_created",
                [json_kv("boxes", json!(self.app.boxes().len()))],
            );
        }
        if effects.clicks > 0 {
            let (x, y) = self
                .app
                .last_pointer()
                .map(|point| (point.x, point.y))
                .unwrap_or_default();
            self.log_runtime_event(
                LogLevel::Info,
                APP_TARGET,
                "click_applied",
                [
                    json_kv("boxes_hit", json!(effects.clicks)),
                    json_kv("x", json!(x)),
                    json_kv("y", json!(y)),
                ],
            );
        }
    }

    fn log_runtime_event<I>(&self, level: LogLevel, target: &str, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            if !logger.enabled(level) {
                return;
            }
            let event = event_with_fields(level, target, message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_effects_metrics(&mut self, effects: &Effects) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_event();
                guard.record_repacks(effects.repacks);
                guard.record_clicks(effects.clicks);
                for _ in 0..effects.created {
                    guard.record_box_created();
                }
            }
        }
    }

    fn record_render_metric(&mut self, written: bool) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_render(written);
            }
        }
    }

    fn maybe_emit_metrics(&mut self) {
        if self.config.metrics.is_none() || self.config.metrics_interval.is_zero() {
            return;
        }

        let now = Instant::now();
        match self.last_metrics_emit {
            Some(last) if now.duration_since(last) < self.config.metrics_interval => {
                return;
            }
            _ => {
                self.last_metrics_emit = Some(now);
            }
        }

        let uptime = self
            .start_instant
            .map(|start| now.duration_since(start))
            .unwrap_or_default();
        self.emit_metrics_snapshot(uptime);
    }

    fn emit_metrics_snapshot(&self, uptime: Duration) {
        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let target = self.config.metrics_target.as_str();
                let snapshot_event = guard.snapshot(uptime).to_log_event(target);
                let _ = logger.log_event(snapshot_event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;

    fn runtime_with_sink() -> (FlowRuntime, MemorySink) {
        let sink = MemorySink::new();
        let mut runtime = FlowRuntime::new(AppState::default(), AnsiRenderer::with_default());
        runtime.config_mut().logger = Some(Logger::new(sink.clone()));
        (runtime, sink)
    }

    #[test]
    fn scripted_run_stops_at_quit() {
        let (mut runtime, _) = runtime_with_sink();
        let mut out = Vec::new();
        runtime
            .run_scripted(
                &mut out,
                [
                    AppEvent::Resize {
                        width: 80,
                        height: 24,
                    },
                    AppEvent::Quit,
                    AppEvent::CreateRequest,
                ],
            )
            .unwrap();
        assert_eq!(runtime.app().boxes().len(), 1);
    }

    #[test]
    fn lifecycle_is_logged() {
        let (mut runtime, sink) = runtime_with_sink();
        let mut out = Vec::new();
        runtime
            .run_scripted(
                &mut out,
                [
                    AppEvent::Resize {
                        width: 80,
                        height: 24,
                    },
                    AppEvent::PointerDown { x: 3, y: 2 },
                    AppEvent::PointerUp { x: 3, y: 2 },
                    AppEvent::Quit,
                ],
            )
            .unwrap();

        let messages = sink.messages();
        for expected in [
            "runtime_started",
            "resized",
            "box_created",
            "click_applied",
            "exit_requested",
            "runtime_metrics",
            "runtime_stopped",
        ] {
            assert!(
                messages.iter().any(|m| m == expected),
                "missing {expected} in {messages:?}"
            );
        }
    }

    #[test]
    fn pointer_noise_does_not_redraw() {
        let (mut runtime, sink) = runtime_with_sink();
        let mut out = Vec::new();
        runtime
            .run_scripted(
                &mut out,
                [
                    AppEvent::Resize {
                        width: 80,
                        height: 24,
                    },
                    AppEvent::PointerMove { x: 50, y: 20 },
                    AppEvent::PointerDown { x: 70, y: 20 },
                    AppEvent::PointerUp { x: 70, y: 20 },
                ],
            )
            .unwrap();

        let renders = sink
            .messages()
            .iter()
            .filter(|m| *m == "render_completed")
            .count();
        // Bootstrap frame plus the frame after the first resize.
        assert_eq!(renders, 2);
    }

    #[test]
    fn metrics_track_clicks_and_repacks() {
        let (mut runtime, _) = runtime_with_sink();
        runtime.config_mut().enable_metrics();
        let handle = runtime.config_mut().metrics_handle().unwrap();
        let mut out = Vec::new();
        runtime
            .run_scripted(
                &mut out,
                [
                    AppEvent::Resize {
                        width: 80,
                        height: 24,
                    },
                    AppEvent::CreateRequest,
                    AppEvent::PointerDown { x: 30, y: 3 },
                    AppEvent::PointerUp { x: 30, y: 3 },
                ],
            )
            .unwrap();

        let snapshot = handle.lock().unwrap().snapshot(Duration::ZERO);
        assert_eq!(snapshot.events, 4);
        assert_eq!(snapshot.boxes_created, 2);
        assert_eq!(snapshot.clicks, 1);
        assert_eq!(snapshot.repacks, 3);
        assert_eq!(snapshot.renders, 4);
    }

    #[test]
    fn app_config_without_log_path_has_no_logger() {
        let runtime = FlowRuntime::from_app_config(&AppConfig::default()).unwrap();
        assert!(runtime.config.logger.is_none());
        assert!(!runtime.app().is_ready());
    }
}
