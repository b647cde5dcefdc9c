//! Frame composition and terminal output.

pub mod compose;
mod core;

pub use compose::{HAlign, VAlign, compose_rows, join_horizontal, join_vertical};
pub use core::{AnsiRenderer, RendererSettings};
