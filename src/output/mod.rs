//! Terminal output formatting
//!
//! Display utilities for the line-based mode and the subcommands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_result, print_share_link, print_stats};
