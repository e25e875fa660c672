//! Word lists for the default dictionary
//!
//! Provides embedded upper-case word lists compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
