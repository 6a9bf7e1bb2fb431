//! Embedded word lists
//!
//! Generated by `build.rs`; the answer set is a subset of the allowed set.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
