//! Shared utilities: error types, the crate-wide `Result` alias and
//! file-system guards used by every adapter that touches the disk.

pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
