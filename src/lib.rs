//! Terminal flow layout of clickable counter boxes.
//!
//! Boxes are packed left to right and wrap into new rows when the terminal
//! width runs out. Every content change or resize repacks all boxes in
//! creation order; a mouse click increments whichever box sits under the
//! release point.

pub mod app;
pub mod boxes;
pub mod config;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod runtime;
pub mod style;
pub mod width;

pub use app::{AppEvent, AppState, Control, Effects};
pub use boxes::{CounterBox, FlowBox};
pub use config::{AppConfig, ConfigError};
pub use error::{FlowError, Result};
pub use geometry::{Point, Rect, Size};
pub use hit::{contains, hit_test, hits};
pub use layout::{FlowConfig, FlowItem, FlowLayout, PackSummary, Placement, RowAdvance};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, RuntimeMetrics};
pub use render::{AnsiRenderer, RendererSettings};
pub use runtime::driver::cli::{CliDriver, CliDriverError, DriverResult};
pub use runtime::{FlowRuntime, RuntimeConfig};
pub use style::{Align, BoxStyle, RenderedBlock};
pub use width::display_width;
