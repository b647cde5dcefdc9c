//! Flow layout orchestrator.
//!
//! Downstream modules import layout types from here while the packing pass
//! lives in the private `core` module.

mod core;

pub use core::{FlowConfig, FlowItem, FlowLayout, PackSummary, Placement, RowAdvance};
