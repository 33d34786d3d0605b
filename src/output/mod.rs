//! Terminal output formatting
//!
//! Display utilities for the line-based game and lookup commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_alphabet, print_board, print_feedback, print_lookup_result, print_status, print_summary,
    print_targets_result,
};
