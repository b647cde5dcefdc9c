use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RuntimeMetrics {
    events: u64,
    renders: u64,
    skipped_renders: u64,
    repacks: u64,
    boxes_created: u64,
    clicks: u64,
}

impl RuntimeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&mut self) {
        self.events = self.events.saturating_add(1);
    }

    /// `written` is false when the frame matched the previous one and the
    /// renderer skipped the write.
    pub fn record_render(&mut self, written: bool) {
        if written {
            self.renders = self.renders.saturating_add(1);
        } else {
            self.skipped_renders = self.skipped_renders.saturating_add(1);
        }
    }

    pub fn record_repacks(&mut self, count: u64) {
        self.repacks = self.repacks.saturating_add(count);
    }

    pub fn record_box_created(&mut self) {
        self.boxes_created = self.boxes_created.saturating_add(1);
    }

    pub fn record_clicks(&mut self, count: usize) {
        self.clicks = self.clicks.saturating_add(count as u64);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            events: self.events,
            renders: self.renders,
            skipped_renders: self.skipped_renders,
            repacks: self.repacks,
            boxes_created: self.boxes_created,
            clicks: self.clicks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub events: u64,
    pub renders: u64,
    pub skipped_renders: u64,
    pub repacks: u64,
    pub boxes_created: u64,
    pub clicks: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "runtime_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("events".to_string(), json!(self.events));
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("skipped_renders".to_string(), json!(self.skipped_renders));
        map.insert("repacks".to_string(), json!(self.repacks));
        map.insert("boxes_created".to_string(), json!(self.boxes_created));
        map.insert("clicks".to_string(), json!(self.clicks));
        map
    }
}
