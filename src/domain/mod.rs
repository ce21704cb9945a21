pub mod builtin;
pub mod catalog;
pub mod reference;
pub mod types;

pub use catalog::*;
pub use reference::*;
pub use types::*;
