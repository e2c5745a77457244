//! Chat domain - reply resolution and exchange persistence.

pub mod actions;
pub mod fallback;
pub mod types;

pub use actions::*;
pub use fallback::{FallbackTable, DEFAULT_REPLY};
pub use types::*;
