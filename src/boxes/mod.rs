mod core;

pub use core::{CounterBox, FlowBox};
