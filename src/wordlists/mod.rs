//! Word lists for word mode
//!
//! Embedded at build time from `data/answers.txt` and `data/allowed.txt`.
//! The engine treats them as opaque read-only sets.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
