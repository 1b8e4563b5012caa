//! Command implementations

pub mod eval;
pub mod play;
pub mod watch;

pub use eval::run_eval_sweep;
pub use play::{HumanPlayer, run_play};
pub use watch::{WatchResult, print_watch_result, run_watch};
