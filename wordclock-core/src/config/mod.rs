//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills these from
//! the embedded `clock.toml`; anything not set keeps its default.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
