mod utils;

pub use utils::{block_width, display_width};
