//! Game session driving

mod session;

pub use session::{GameOutcome, GameSession};
