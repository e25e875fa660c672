//! Command implementations

pub mod play;
pub mod score;

pub use play::{play_game, run_play};
pub use score::score_guess;
