//! Terminal output formatting
//!
//! Rendering for guesses and finished games. The core never prints; these
//! helpers are for the binary.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_guess, print_outcome};
pub use formatters::share_text;
