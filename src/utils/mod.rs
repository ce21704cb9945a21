pub mod format;

pub use format::{format_grouped, format_multiple};
